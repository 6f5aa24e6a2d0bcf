//! Error types for the Extractor

use parley_llm::LlmError;
use thiserror::Error;

/// Errors that can occur while obtaining or reading a model reply
///
/// None of these escape the `Analyzer`: each one is folded into the failure
/// variant of the result being built, with its message attached.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Network or HTTP failure from the upstream provider
    #[error("Transport error: {0}")]
    Transport(String),

    /// Payload not valid JSON or missing expected fields
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No usable text came back
    #[error("Empty response from model")]
    EmptyInput,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<LlmError> for ExtractorError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MalformedResponse(msg) => ExtractorError::MalformedResponse(msg),
            other => ExtractorError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::MalformedResponse(e.to_string())
    }
}
