//! Configuration loader for mudog.
//!
//! `defaults/mudog.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. The CLI layers `mudog.toml` from the working
//! directory, then any `--config` file, then `--output` (as an override of
//! `output.default_name`) on top of those defaults via [`Loader`] before
//! deserializing into [`MudogConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use super::interpreter::RenderOptions;

const DEFAULT_TOML: &str = include_str!("../../defaults/mudog.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "mudog.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MudogConfig {
    pub output: OutputConfig,
    pub render: RenderConfig,
    pub interpreter: InterpreterConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// File written when no output path is given.
    pub default_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub fence_language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterpreterConfig {
    pub max_depth: usize,
}

impl MudogConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fence_language: self.render.fence_language.clone(),
            max_depth: self.interpreter.max_depth,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override. Overrides win over every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MudogConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::default().build().expect("defaults to deserialize");
        assert_eq!(config.output.default_name, "README.md");
        assert_eq!(config.render.fence_language, "c");
        assert_eq!(config.interpreter.max_depth, 64);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.fence_language", "cpp")
            .expect("override to apply")
            .set_override("interpreter.max_depth", 8i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.fence_language, "cpp");
        assert_eq!(config.render_options().max_depth, 8);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\ndefault_name = \"DOCS.md\"").unwrap();
        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.output.default_name, "DOCS.md");
        // Untouched keys keep their defaults
        assert_eq!(config.render.fence_language, "c");
    }

    #[test]
    fn output_override_beats_file_layers() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\ndefault_name = \"DOCS.md\"").unwrap();
        let config = Loader::new()
            .with_file(file.path())
            .set_override("output.default_name", "out/API.md")
            .expect("override to apply")
            .build()
            .unwrap();
        assert_eq!(config.output.default_name, "out/API.md");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/definitely/not/here.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here.toml")
            .build()
            .unwrap();
        assert_eq!(config.output.default_name, "README.md");
    }
}
