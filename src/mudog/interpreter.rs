//! Directive interpreter
//!
//! Executes one recognized directive against the input and output streams.
//! Prose directives (`@DOCBEGIN`, `@DOCLINE`) copy input to output and call
//! back into the recognizer for every `@` they meet, so directives nest to any
//! depth up to [`RenderOptions::max_depth`].
//!
//! Emission gate
//!
//!     `@IGNORE` and `@ATTENTION` only bump counters. Every other directive is a
//!     no-op while `attention_count < ignore_count`, which means a later
//!     `@ATTENTION` can reopen the gate for directives that follow it, but
//!     anything skipped while it was closed is gone. A skipped `@DOCBEGIN` does
//!     not consume its body; the scan driver walks over it as ordinary text.
//!
//! Line-snippet directives
//!
//!     `@NL`, `@NLNT` and `@NLFT` read ahead into the next source line and
//!     finish by stepping the input back one byte, so the newline (or byte)
//!     that ended the snippet is read again by whoever called them. There is
//!     no step back when nothing was read past the snippet: at end of input,
//!     or when `@NLFT` copied a single non-identifier byte.

use std::io::Write;

use tracing::{debug, trace};

use super::directive::{is_identifier_byte, Directive, DIRECTIVE_PREFIX};
use super::error::{MudogError, Result};
use super::recognizer::{recognize, Recognition};
use super::stream::CharSource;

/// Mutable state for one input file. Never shared between files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpreterState {
    /// Leading tabs of the current prose line are being dropped.
    pub tab_suppression_active: bool,
    pub ignore_count: usize,
    pub attention_count: usize,
}

impl InterpreterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether gated directives may run.
    pub fn gate_open(&self) -> bool {
        self.attention_count >= self.ignore_count
    }
}

/// Rendering knobs, usually taken from [`MudogConfig`](crate::mudog::config::MudogConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Language tag on fenced code blocks.
    pub fence_language: String,
    /// Deepest allowed directive nesting inside prose bodies.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            fence_language: "c".to_string(),
            max_depth: 64,
        }
    }
}

/// Executes directives for a single input file.
#[derive(Debug)]
pub struct Interpreter<'o> {
    options: &'o RenderOptions,
    state: InterpreterState,
}

impl<'o> Interpreter<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Interpreter {
            options,
            state: InterpreterState::new(),
        }
    }

    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    pub fn into_state(self) -> InterpreterState {
        self.state
    }

    /// Execute a top-level recognition. No-match recognitions do nothing.
    pub fn execute<S, W>(
        &mut self,
        recognition: &Recognition,
        input: &mut S,
        output: &mut W,
    ) -> Result<()>
    where
        S: CharSource + ?Sized,
        W: Write + ?Sized,
    {
        match recognition.directive {
            Some(directive) => self.run(directive, recognition.ends_line(), input, output, 0),
            None => Ok(()),
        }
    }

    fn run<S, W>(
        &mut self,
        directive: Directive,
        ends_line: bool,
        input: &mut S,
        output: &mut W,
        depth: usize,
    ) -> Result<()>
    where
        S: CharSource + ?Sized,
        W: Write + ?Sized,
    {
        if depth > self.options.max_depth {
            return Err(MudogError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }
        if directive.is_gated() && !self.state.gate_open() {
            trace!(%directive, depth, "gate closed, skipping");
            return Ok(());
        }
        debug!(%directive, depth, "executing directive");

        match directive {
            Directive::DocBegin | Directive::DocLine => {
                self.copy_prose(directive, ends_line, input, output, depth)
            }
            // Only its recognition matters; the enclosing copy loop stops on it.
            Directive::DocEnd => Ok(()),
            Directive::Nl => self.emit_code_line(false, ends_line, input, output),
            Directive::NlNt => self.emit_code_line(true, ends_line, input, output),
            Directive::NlFt => self.emit_first_token(ends_line, input, output),
            Directive::Ignore => {
                self.state.ignore_count += 1;
                Ok(())
            }
            Directive::Attention => {
                self.state.attention_count += 1;
                Ok(())
            }
        }
    }

    fn copy_prose<S, W>(
        &mut self,
        directive: Directive,
        ends_line: bool,
        input: &mut S,
        output: &mut W,
        depth: usize,
    ) -> Result<()>
    where
        S: CharSource + ?Sized,
        W: Write + ?Sized,
    {
        let single_line = directive == Directive::DocLine;
        if single_line {
            output.write_all(b"\n")?;
        }

        let mut previous = if ends_line { Some(b'\n') } else { None };
        while let Some(byte) = input.next_char()? {
            if byte == DIRECTIVE_PREFIX {
                let nested = recognize(input)?;
                if let Some(inner) = nested.directive {
                    self.run(inner, nested.ends_line(), input, output, depth + 1)?;
                    if inner == Directive::DocEnd {
                        break;
                    }
                }
            } else if single_line && byte == b'\n' {
                break;
            } else {
                if previous == Some(b'\n') {
                    self.state.tab_suppression_active = true;
                }
                if self.state.tab_suppression_active && byte != b'\t' {
                    self.state.tab_suppression_active = false;
                }
                if !self.state.tab_suppression_active {
                    output.write_all(&[byte])?;
                }
            }
            previous = Some(byte);
        }
        Ok(())
    }

    fn emit_code_line<S, W>(
        &mut self,
        strip_tabs: bool,
        ends_line: bool,
        input: &mut S,
        output: &mut W,
    ) -> Result<()>
    where
        S: CharSource + ?Sized,
        W: Write + ?Sized,
    {
        write!(output, "\n\n```{}\n", self.options.fence_language)?;

        let mut current = enter_next_line(ends_line, input)?;
        if strip_tabs {
            while current == Some(b'\t') {
                current = input.next_char()?;
            }
        }
        while let Some(byte) = current {
            if byte == b'\n' {
                break;
            }
            output.write_all(&[byte])?;
            current = input.next_char()?;
        }

        output.write_all(b"\n```\n")?;
        if current.is_some() {
            step_back(input)?;
        }
        Ok(())
    }

    fn emit_first_token<S, W>(&mut self, ends_line: bool, input: &mut S, output: &mut W) -> Result<()>
    where
        S: CharSource + ?Sized,
        W: Write + ?Sized,
    {
        let mut current = enter_next_line(ends_line, input)?;
        while matches!(current, Some(b'\t' | b' ')) {
            current = input.next_char()?;
        }

        match current {
            Some(first) if is_identifier_byte(first) => {
                while let Some(byte) = current.filter(|b| is_identifier_byte(*b)) {
                    output.write_all(&[byte])?;
                    current = input.next_char()?;
                }
                // The byte that ended the run was read but not emitted
                if current.is_some() {
                    step_back(input)?;
                }
            }
            Some(other) => output.write_all(&[other])?,
            None => {}
        }
        Ok(())
    }
}

/// Skip the rest of the directive's line and return the first byte of the next.
fn enter_next_line<S: CharSource + ?Sized>(ends_line: bool, input: &mut S) -> Result<Option<u8>> {
    if !ends_line {
        loop {
            match input.next_char()? {
                Some(b'\n') => break,
                Some(_) => {}
                None => return Ok(None),
            }
        }
    }
    Ok(input.next_char()?)
}

fn step_back<S: CharSource + ?Sized>(input: &mut S) -> Result<()> {
    let position = input.position()?;
    input.seek(position.previous())?;
    Ok(())
}
