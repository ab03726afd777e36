//! Tokenizer configuration

use crate::tokenizer::{DelimiterSet, Tokenizer};

/// Settings shared by every tokenizer built from it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerConfig {
    /// Characters that separate tokens
    pub delimiters: DelimiterSet,
    /// Emit each delimiter character as its own token
    pub retain_delimiters: bool,
}

impl TokenizerConfig {
    /// Create a builder
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Comma-separated values, delimiters dropped
    pub fn csv() -> Self {
        Self {
            delimiters: DelimiterSet::from(","),
            retain_delimiters: false,
        }
    }

    /// Tokenize `source` with this configuration
    pub fn tokenizer(&self, source: impl Into<String>) -> Tokenizer {
        Tokenizer::from_config(source, self)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Set the delimiter characters
    pub fn delimiters(mut self, delimiters: impl Into<DelimiterSet>) -> Self {
        self.config.delimiters = delimiters.into();
        self
    }

    /// Emit delimiters as tokens
    pub fn retain_delimiters(mut self, retain: bool) -> Self {
        self.config.retain_delimiters = retain;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TokenizerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TokenizerConfig::default();
        assert_eq!(config.delimiters, DelimiterSet::whitespace());
        assert!(!config.retain_delimiters);
    }

    #[test]
    fn test_builder() {
        let config = TokenizerConfig::builder()
            .delimiters(";|")
            .retain_delimiters(true)
            .build();

        assert_eq!(config.delimiters.as_chars(), &[';', '|']);
        assert!(config.retain_delimiters);
    }

    #[test]
    fn test_config_builds_tokenizer() {
        let tokens: Vec<String> = TokenizerConfig::csv().tokenizer("x,y,,z").collect();
        assert_eq!(tokens, vec!["x", "y", "z"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_with_defaults() {
        let config: TokenizerConfig = serde_json::from_str(r#"{"delimiters": ",;"}"#).unwrap();
        assert_eq!(config.delimiters.as_chars(), &[',', ';']);
        assert!(!config.retain_delimiters);

        let config: TokenizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TokenizerConfig::default());
    }
}
