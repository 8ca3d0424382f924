//! Testing utilities
//!
//! Directive behavior is easy to get subtly wrong in hand-written strings
//! (a space where a tab was meant, a missing trailing newline). Tests that
//! exercise whole documents should load the curated files under `samples/`
//! through [`Samples`] instead of inlining source text.
//!
//! ```rust,ignore
//! use mudog::mudog::testing::{render_sample, Samples};
//!
//! let source = Samples::get_string("010-docbegin.c")?;
//! let markdown = render_sample("010-docbegin.c")?;
//! ```
//!
//! Available samples:
//! - `000-docline.c` - single-line prose
//! - `010-docbegin.c` - prose block with leading-tab suppression
//! - `020-snippets.c` - `@NL`, `@NLNT` and `@NLFT`
//! - `030-gating.c` - `@IGNORE` / `@ATTENTION`
//! - `040-stack.c` - everything together

use std::fs;
use std::io;
use std::path::PathBuf;

use super::error::Result;
use super::interpreter::RenderOptions;
use super::processor::render_bytes;

/// Access to the curated sample sources.
pub struct Samples;

impl Samples {
    /// Directory holding the sample files.
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(name)
    }

    pub fn get_string(name: &str) -> io::Result<String> {
        fs::read_to_string(Self::path(name))
    }

    /// Names of every sample, sorted.
    pub fn list() -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(Self::dir())?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect::<Vec<_>>();
        names.sort();
        Ok(names)
    }
}

/// Render a sample with default options.
pub fn render_sample(name: &str) -> Result<String> {
    let source = fs::read(Samples::path(name))?;
    let bytes = render_bytes(&source, &RenderOptions::default())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
