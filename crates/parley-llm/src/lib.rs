//! Parley LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `parley-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Ollama chat API integration (whole or streamed replies)
//!
//! # Examples
//!
//! ```
//! use parley_llm::MockProvider;
//! use parley_domain::{LlmProvider, ResponseMode};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let provider = MockProvider::new("Sentiment: Positive");
//! let result = provider.generate("test prompt", ResponseMode::Whole).await.unwrap();
//! assert_eq!(result, "Sentiment: Positive");
//! # }
//! ```

#![warn(missing_docs)]

pub mod ollama;

use parley_domain::{LlmProvider, ResponseMode};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or HTTP failure talking to the endpoint
    #[error("Transport error: {0}")]
    Transport(String),

    /// Payload was not valid JSON or lacked the expected fields
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured replies without making any network
/// calls. Clones share the same reply table and bookkeeping.
///
/// # Examples
///
/// ```
/// use parley_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2", "connection refused");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_mode: Arc<Mutex<Option<ResponseMode>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed reply for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(response.into()))
    }

    /// Create a MockProvider that fails every call with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Failure(message.into()))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_mode: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific reply for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Failure(message.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    /// The response mode requested by the most recent call
    pub fn last_mode(&self) -> Option<ResponseMode> {
        *self.last_mode.lock().unwrap()
    }

    fn reply_for(&self, prompt: &str) -> MockReply {
        *self.call_count.lock().unwrap() += 1;

        self.responses
            .lock()
            .unwrap()
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_reply.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str, mode: ResponseMode) -> Result<String, Self::Error> {
        *self.last_mode.lock().unwrap() = Some(mode);

        match self.reply_for(prompt) {
            MockReply::Text(text) => Ok(text),
            MockReply::Failure(message) => Err(LlmError::Transport(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt", ResponseMode::Whole).await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("hello", ResponseMode::Whole).await.unwrap(), "world");
        assert_eq!(provider.generate("foo", ResponseMode::Whole).await.unwrap(), "bar");
        assert_eq!(
            provider.generate("unknown", ResponseMode::Whole).await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1", ResponseMode::Whole).await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate("prompt2", ResponseMode::Streaming).await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt", "connection refused");

        let result = provider.generate("bad prompt", ResponseMode::Whole).await;
        match result {
            Err(LlmError::Transport(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_provider_failing() {
        let provider = MockProvider::failing("offline");
        assert!(provider.generate("anything", ResponseMode::Whole).await.is_err());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_records_mode() {
        let provider = MockProvider::new("x");
        assert_eq!(provider.last_mode(), None);

        provider.generate("p", ResponseMode::Streaming).await.unwrap();
        assert_eq!(provider.last_mode(), Some(ResponseMode::Streaming));
    }

    #[tokio::test]
    async fn test_mock_provider_clone() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test", ResponseMode::Whole).await.unwrap();

        // Both should share the same call count due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
