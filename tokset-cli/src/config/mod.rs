//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokset_core::TokenizerConfig;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Tokenizer defaults
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&text)?;
        log::debug!("loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
