//! Configuration loader for rewiki.
//!
//! `defaults/rewiki.default.toml` is embedded into the binary and is always the bottom
//! layer, so the documented defaults and the runtime defaults cannot drift apart. Callers
//! stack their own files and overrides on top with [`Loader`] and deserialize the result
//! into [`RewikiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use rewiki_babel::DialectRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rewiki.default.toml");

/// Top-level configuration consumed by rewiki applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RewikiConfig {
    pub dialect: DialectConfig,
    pub pipeline: PipelineConfig,
}

/// Surface syntax of the source and target dialects.
#[derive(Debug, Clone, Deserialize)]
pub struct DialectConfig {
    pub source_heading_marker: char,
    pub target_heading_marker: char,
    pub emphasis_quote: String,
}

/// Optional passes.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub triple_quote_reduction: bool,
}

impl RewikiConfig {
    /// Dialect rules for building a pipeline.
    pub fn rules(&self) -> DialectRules {
        self.into()
    }
}

impl From<RewikiConfig> for DialectRules {
    fn from(config: RewikiConfig) -> Self {
        DialectRules::from(&config)
    }
}

impl From<&RewikiConfig> for DialectRules {
    fn from(config: &RewikiConfig) -> Self {
        DialectRules {
            source_heading_marker: config.dialect.source_heading_marker,
            target_heading_marker: config.dialect.target_heading_marker,
            emphasis_quote: config.dialect.emphasis_quote.clone(),
            triple_quote_reduction: config.pipeline.triple_quote_reduction,
        }
    }
}

/// Builder layering files and overrides over the embedded defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Building fails if it does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set a single dotted key, e.g. `dialect.target_heading_marker`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RewikiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the embedded defaults only.
pub fn load_defaults() -> Result<RewikiConfig, ConfigError> {
    Loader::new().build()
}
