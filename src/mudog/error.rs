//! Error types for mudog

use std::io;
use std::path::PathBuf;

/// Errors that can occur while rendering documentation.
///
/// Unrecognized directive tokens are not errors; they are dropped from the
/// output and counted in [`ScanReport`](crate::mudog::scanner::ScanReport).
#[derive(Debug, thiserror::Error)]
pub enum MudogError {
    #[error("Failed to open file \"{}\": {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("Failed to create output file in \"{}\": {source}", dir.display())]
    CreateOutput { dir: PathBuf, source: io::Error },

    #[error("Failed to write output file \"{}\": {source}", path.display())]
    PersistOutput { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directives nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, MudogError>;
