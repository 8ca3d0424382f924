//! # mudog
//!
//! Extracts `@`-directive documentation embedded in source files and renders it
//! into a single Markdown document.
//!
//! ```text
//! /* @DOCBEGIN
//!     # stack
//!     A tiny integer stack.
//! @DOCEND */
//!
//! /* @NL */
//! int stack_push(stack_t *s, int value);
//! ```
//!
//! Directives: `@DOCBEGIN` / `@DOCEND` (prose block), `@DOCLINE` (one line of
//! prose), `@NL` / `@NLNT` (next line as a fenced code block), `@NLFT` (first
//! token of the next line) and `@IGNORE` / `@ATTENTION` (emission gate). See
//! [`mudog::directive`] for the table.
//!
//! ## Known limitations
//!
//! There is no escape for `@`. An `@` followed by anything that is not exactly
//! a keyword is dropped together with the bytes the recognizer read, so
//! `user@example.com` loses `@ex` in any prose block.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](mudog::testing).
//! Whole-document tests should use the curated sources in `samples/`.

pub mod mudog;
