//! Directive keyword table
//!
//! A directive is an `@` followed by one of a fixed set of uppercase keywords.
//! The table below is the single source of truth for those keywords; the
//! recognizer walks it by position and the CLI prints it for `--list-directives`.
//!
//! Keywords are compared byte-for-byte. Identifier characters are ASCII letters,
//! digits and underscore only.

use serde::Serialize;
use std::fmt;

/// All directives understood by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Directive {
    /// Opens a prose block copied verbatim until `@DOCEND`.
    DocBegin,
    /// Closes the innermost prose block.
    DocEnd,
    /// Emits the next source line as a fenced code block.
    Nl,
    /// Like `Nl`, with leading tabs of the code line stripped.
    NlNt,
    /// Emits the first token of the next source line, unfenced.
    NlFt,
    /// A single-line prose block, preceded by a newline.
    DocLine,
    /// Closes the emission gate one level.
    Ignore,
    /// Reopens the emission gate one level.
    Attention,
}

/// Keyword strings, indexed in the same order as [`Directive::all`].
pub const KEYWORDS: [&str; 8] = [
    "DOCBEGIN",
    "DOCEND",
    "NL",
    "NLNT",
    "NLFT",
    "DOCLINE",
    "IGNORE",
    "ATTENTION",
];

const ALL: [Directive; 8] = [
    Directive::DocBegin,
    Directive::DocEnd,
    Directive::Nl,
    Directive::NlNt,
    Directive::NlFt,
    Directive::DocLine,
    Directive::Ignore,
    Directive::Attention,
];

/// Byte that introduces a directive.
pub const DIRECTIVE_PREFIX: u8 = b'@';

/// ASCII letter, digit or underscore.
pub fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl Directive {
    /// Every directive, in keyword-table order.
    pub fn all() -> &'static [Directive] {
        &ALL
    }

    fn index(self) -> usize {
        match self {
            Directive::DocBegin => 0,
            Directive::DocEnd => 1,
            Directive::Nl => 2,
            Directive::NlNt => 3,
            Directive::NlFt => 4,
            Directive::DocLine => 5,
            Directive::Ignore => 6,
            Directive::Attention => 7,
        }
    }

    /// The uppercase keyword that follows `@` in source text.
    pub fn keyword(self) -> &'static str {
        KEYWORDS[self.index()]
    }

    /// Exact, case-sensitive lookup of a keyword.
    pub fn from_keyword(keyword: &str) -> Option<Directive> {
        ALL.iter().copied().find(|d| d.keyword() == keyword)
    }

    /// One-line description shown by `mudog --list-directives`.
    pub fn description(self) -> &'static str {
        match self {
            Directive::DocBegin => "start copying prose until @DOCEND",
            Directive::DocEnd => "end the enclosing @DOCBEGIN block",
            Directive::Nl => "emit the next source line as a fenced code block",
            Directive::NlNt => "like @NL, stripping the line's leading tabs",
            Directive::NlFt => "emit the first identifier of the next source line",
            Directive::DocLine => "copy the rest of this line as prose on a new line",
            Directive::Ignore => "suppress documentation output (nests)",
            Directive::Attention => "cancel one preceding @IGNORE",
        }
    }

    /// Directives that are silenced while the emission gate is closed.
    pub fn is_gated(self) -> bool {
        !matches!(self, Directive::Ignore | Directive::Attention)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.keyword())
    }
}
