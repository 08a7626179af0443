//! Configuration loader for domseek.
//!
//! Settings are layered, later layers winning:
//!
//! 1. `defaults/domseek.default.toml`, embedded into the binary
//! 2. `domseek.toml` in the working directory, when present
//! 3. a file named with `--config`
//! 4. command-line flags (`--format`, `--details`)
//!
//! [`Loader`] stacks the layers and deserializes into [`DomseekConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/domseek.default.toml");

/// Per-directory settings file, layered between the defaults and `--config`.
pub const PROJECT_FILE: &str = "domseek.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DomseekConfig {
    pub search: SearchConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub details: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Layers user settings over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file, skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `domseek.toml` from `dir` when there is one.
    pub fn with_project_file(self, dir: impl AsRef<Path>) -> Self {
        self.with_optional_file(dir.as_ref().join(PROJECT_FILE))
    }

    /// Override one key, e.g. `output.format` from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DomseekConfig, ConfigError> {
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
        let config = Loader::new().build().expect("defaults to deserialize");
        assert!(!config.search.details);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .set_override("search.details", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.search.details);
    }

    #[test]
    fn user_file_is_layered_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[logging]\nfilter = \"domseek=debug\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.logging.filter, "domseek=debug");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn missing_files() {
        let missing = Path::new("/nonexistent/domseek.toml");
        assert!(Loader::new().with_file(missing).build().is_err());
        assert!(Loader::new().with_optional_file(missing).build().is_ok());
    }

    #[test]
    fn project_file_is_optional() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Loader::new()
            .with_project_file(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Text);

        std::fs::write(dir.path().join(PROJECT_FILE), "[search]\ndetails = true\n")
            .expect("write project file");
        let config = Loader::new()
            .with_project_file(dir.path())
            .build()
            .expect("config to build");
        assert!(config.search.details);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("output.format", "yaml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
