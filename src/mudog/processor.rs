//! Multi-file processing
//!
//! Renders a list of source files, in the order given, into one Markdown
//! document. Each file gets a fresh interpreter state; nothing carries over
//! between files except the output they share.
//!
//! The document is written to a temporary file next to the destination and
//! only moved into place once every input has been processed, so a failed run
//! never leaves a half-written document behind.
//!
//! # Example
//!
//! ```rust
//! use mudog::mudog::interpreter::RenderOptions;
//! use mudog::mudog::processor::render_str;
//!
//! let markdown = render_str("/* @DOCLINE # API */", &RenderOptions::default()).unwrap();
//! assert_eq!(markdown, "\n# API */");
//! ```

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use super::error::{MudogError, Result};
use super::interpreter::RenderOptions;
use super::scanner::{scan, ScanReport};
use super::stream::InputStream;

/// Outcome of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub scan: ScanReport,
}

/// Output document staged in a temporary file until [`OutputFile::persist`].
#[derive(Debug)]
pub struct OutputFile {
    writer: BufWriter<NamedTempFile>,
    destination: PathBuf,
}

impl OutputFile {
    /// Create the staging file in the destination's directory.
    pub fn create(destination: impl Into<PathBuf>) -> Result<Self> {
        let destination = destination.into();
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let temp = NamedTempFile::new_in(&dir)
            .map_err(|source| MudogError::CreateOutput { dir, source })?;
        Ok(OutputFile {
            writer: BufWriter::new(temp),
            destination,
        })
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn writer(&mut self) -> &mut impl Write {
        &mut self.writer
    }

    /// Flush and move the document to its destination, replacing any old file.
    pub fn persist(self) -> Result<PathBuf> {
        let OutputFile {
            writer,
            destination,
        } = self;
        let temp = writer
            .into_inner()
            .map_err(|e| MudogError::PersistOutput {
                path: destination.clone(),
                source: e.into_error(),
            })?;
        temp.persist(&destination)
            .map_err(|e| MudogError::PersistOutput {
                path: destination.clone(),
                source: e.error,
            })?;
        Ok(destination)
    }
}

/// Renders source files into a single document.
#[derive(Debug, Clone)]
pub struct DocumentBuilder<'o> {
    options: &'o RenderOptions,
}

impl<'o> DocumentBuilder<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        DocumentBuilder { options }
    }

    /// Append the rendering of one file to `output`.
    pub fn append_file<W: Write + ?Sized>(&self, path: &Path, output: &mut W) -> Result<FileReport> {
        let mut input = InputStream::open(path).map_err(|source| MudogError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        let scan = scan(&mut input, output, self.options)?;
        info!(
            path = %path.display(),
            directives = scan.directives,
            unmatched = scan.unmatched,
            "processed input"
        );
        Ok(FileReport {
            path: path.to_path_buf(),
            scan,
        })
    }

    /// Render every input, in order, into `destination`.
    pub fn build<P: AsRef<Path>>(&self, inputs: &[P], destination: &Path) -> Result<Vec<FileReport>> {
        let mut output = OutputFile::create(destination)?;
        let mut reports = Vec::with_capacity(inputs.len());
        for input in inputs {
            reports.push(self.append_file(input.as_ref(), output.writer())?);
        }
        let written = output.persist()?;
        info!(output = %written.display(), files = reports.len(), "document written");
        Ok(reports)
    }
}

/// Render in-memory source bytes.
pub fn render_bytes(source: &[u8], options: &RenderOptions) -> Result<Vec<u8>> {
    let mut input = InputStream::from_bytes(source);
    let mut output = Vec::new();
    scan(&mut input, &mut output, options)?;
    Ok(output)
}

/// Render in-memory source text. Invalid UTF-8 in the output is replaced.
pub fn render_str(source: &str, options: &RenderOptions) -> Result<String> {
    let bytes = render_bytes(source.as_bytes(), options)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
