//! Main module for mudog library functionality
//!
//! Pipeline:
//!
//! ```text
//! source bytes → scanner (finds `@`) → recognizer (keyword) → interpreter → Markdown
//! ```

pub mod config;
pub mod directive;
pub mod error;
pub mod interpreter;
pub mod processor;
pub mod recognizer;
pub mod scanner;
pub mod stream;
pub mod testing;

pub use directive::Directive;
pub use error::{MudogError, Result};
pub use interpreter::{InterpreterState, RenderOptions};
pub use scanner::{scan, ScanReport};
