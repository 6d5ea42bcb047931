//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Default maximum input length, in characters
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// Default cap on scaffold topics
pub const DEFAULT_MAX_SCAFFOLD_TOPICS: usize = 15;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input text length (characters); longer input is truncated
    pub max_text_length: usize,

    /// Run the pattern matcher
    pub enable_patterns: bool,

    /// Add the "Preference Patterns" line to the context prefix
    pub include_patterns_in_prefix: bool,

    /// Maximum number of topics kept in a summary scaffold
    pub max_scaffold_topics: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_text_length == 0 {
            return Err(ExtractorError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration with every feature group enabled
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            enable_patterns: true,
            include_patterns_in_prefix: true,
            max_scaffold_topics: DEFAULT_MAX_SCAFFOLD_TOPICS,
        }
    }
}

impl ExtractorConfig {
    /// Preset with the pattern matcher switched off
    pub fn without_patterns() -> Self {
        Self {
            enable_patterns: false,
            include_patterns_in_prefix: false,
            ..Self::default()
        }
    }

    /// Set the maximum text length
    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
