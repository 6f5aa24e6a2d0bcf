//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the reply parsers and the
//! infrastructure that feeds them. Implementations live in other crates.

use std::future::Future;

/// How the upstream model should deliver its reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// One complete reply in a single payload
    #[default]
    Whole,

    /// Incremental fragments, concatenated by the provider before returning
    Streaming,
}

impl ResponseMode {
    /// Build a mode from a `stream` flag
    pub fn from_streaming(streaming: bool) -> Self {
        if streaming {
            ResponseMode::Streaming
        } else {
            ResponseMode::Whole
        }
    }

    /// Whether fragments are requested
    pub fn is_streaming(&self) -> bool {
        matches!(self, ResponseMode::Streaming)
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (parley-llm). A provider turns a
/// prompt into the raw reply text or fails; in streaming mode it is
/// responsible for joining fragments, so callers never see partial output.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a text completion for `prompt`
    fn generate(
        &self,
        prompt: &str,
        mode: ResponseMode,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Trait for choosing one category for a text
///
/// Implemented by the classifier layer (parley-classifier), once with static
/// keyword tables and once on top of an `LlmProvider`.
pub trait TextClassifier {
    /// Pick the best matching entry of `categories` for `text`
    ///
    /// Returns `None` when `text` or `categories` is empty.
    fn classify(
        &self,
        text: &str,
        categories: &[String],
    ) -> impl Future<Output = Option<String>> + Send;
}
