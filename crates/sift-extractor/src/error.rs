//! Error types for the Extractor

use thiserror::Error;

/// Reasons an extraction produced no signal, plus configuration failures
///
/// The infallible extraction API never returns these; it logs them and hands
/// back the empty bundle. `try_extract_all` surfaces them for callers that
/// want the reason.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Parser backend could not be constructed
    #[error("Parser unavailable: {0}")]
    ParserUnavailable(String),

    /// Empty or whitespace-only input
    #[error("Empty input")]
    EmptyInput,

    /// Text exceeds maximum length (it is truncated, not rejected)
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Parser failed on this input
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML (de)serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}
