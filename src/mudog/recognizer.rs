//! Directive recognizer
//!
//! Called with the stream positioned just after an `@`. Identifier bytes are
//! read one at a time and every keyword that can no longer match is struck
//! off. Reading stops at the first non-identifier byte, or once no keyword is
//! left, and the keyword whose length equals the number of bytes examined wins.
//!
//! Nothing is ever pushed back. The byte that ends the scan is consumed too,
//! so `@FOO bar` loses `FO` (the `F` struck off every keyword, the `O` after it
//! ended the scan) and `@NL\n` swallows the newline. Callers that care about
//! the latter look at [`Recognition::terminator`].

use std::io;

use super::directive::{is_identifier_byte, Directive, KEYWORDS};
use super::stream::CharSource;

/// Outcome of scanning one directive token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognition {
    /// The matched directive, or `None` for no match.
    pub directive: Option<Directive>,
    /// Identifier bytes examined against the keyword table.
    pub consumed: usize,
    /// The last byte read, which ended the scan. `None` at end of stream.
    pub terminator: Option<u8>,
}

impl Recognition {
    /// Whether the directive token was the last thing on its source line.
    pub fn ends_line(&self) -> bool {
        self.terminator == Some(b'\n')
    }
}

/// Identify the directive keyword at the current stream position.
pub fn recognize<S: CharSource + ?Sized>(input: &mut S) -> io::Result<Recognition> {
    let mut candidates = [true; KEYWORDS.len()];
    let mut consumed = 0;

    let mut current = input.next_char()?;
    while let Some(byte) = current {
        if !is_identifier_byte(byte) || !candidates.iter().any(|c| *c) {
            break;
        }
        for (keyword, alive) in KEYWORDS.iter().zip(candidates.iter_mut()) {
            if *alive && keyword.as_bytes().get(consumed) != Some(&byte) {
                *alive = false;
            }
        }
        current = input.next_char()?;
        consumed += 1;
    }

    let directive = KEYWORDS
        .iter()
        .zip(candidates.iter())
        .find(|(keyword, alive)| **alive && keyword.len() == consumed)
        .and_then(|(keyword, _)| Directive::from_keyword(keyword));

    Ok(Recognition {
        directive,
        consumed,
        terminator: current,
    })
}
