//! Ollama Provider Implementation
//!
//! Talks to Ollama's chat API (`POST /api/chat`).
//!
//! # Features
//!
//! - Whole replies (`"stream": false`) and streamed replies, where every line
//!   of the body is a JSON object carrying one `message.content` fragment
//! - Configurable endpoint, model and timeout
//! - Retry logic with exponential backoff
//!
//! # Examples
//!
//! ```no_run
//! use parley_llm::OllamaProvider;
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "mistral").unwrap();
//! ```

use crate::LlmError;
use parley_domain::{LlmProvider, ResponseMode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model name
pub const DEFAULT_MODEL: &str = "mistral";

/// Default timeout for LLM requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of attempts per request
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Upper bound on attempts per request
pub const MAX_RETRIES_LIMIT: u32 = 10;

/// First backoff delay; each later delay doubles it
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Ollama chat API provider
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
    backoff_base: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessageOut<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessageOut<'a> {
    role: &'a str,
    content: &'a str,
}

/// One chat payload; a whole reply or a single streamed fragment
#[derive(Deserialize)]
struct ChatChunk {
    #[serde(default)]
    message: Option<ChatMessageIn>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ChatMessageIn {
    #[serde(default)]
    content: Option<String>,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Ollama provider with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
        })
    }

    /// Create a new Ollama provider on `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the maximum number of attempts (at least one is always made)
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.clamp(1, MAX_RETRIES_LIMIT);
        self
    }

    /// Set the first backoff delay; later delays double it
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Model name sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` as a single user message and return the reply text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not reachable or keeps answering with a non-success status
    /// - The model is not available (HTTP 404)
    /// - The payload is not JSON or lacks `message.content`
    pub async fn chat(&self, prompt: &str, mode: ResponseMode) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.endpoint);

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessageOut {
                role: "user",
                content: prompt,
            }],
            stream: mode.is_streaming(),
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response
                            .text()
                            .await
                            .map_err(|e| LlmError::Transport(format!("Failed to read body: {}", e)))?;
                        debug!("Ollama replied with {} bytes", body.len());

                        return match mode {
                            ResponseMode::Streaming => join_stream_fragments(&body),
                            ResponseMode::Whole => parse_whole_reply(&body),
                        };
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Transport(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Transport(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                let delay = backoff_delay(self.backoff_base, attempts);
                warn!(attempt = attempts, ?delay, "Ollama request failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Transport("Max retries exceeded".to_string())))
    }
}

impl LlmProvider for OllamaProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str, mode: ResponseMode) -> Result<String, Self::Error> {
        self.chat(prompt, mode).await
    }
}

/// Sleep after failed attempt `attempt` (1-based): base, 2*base, 4*base, ...
///
/// Saturates instead of overflowing for large attempt numbers.
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    base.saturating_mul(factor)
}

/// Sum of every sleep a request with `max_retries` attempts can take
pub fn total_backoff(base: Duration, max_retries: u32) -> Duration {
    (1..max_retries.max(1))
        .map(|attempt| backoff_delay(base, attempt))
        .fold(Duration::ZERO, Duration::saturating_add)
}

/// Read the content of a whole (non-streamed) chat payload
fn parse_whole_reply(body: &str) -> Result<String, LlmError> {
    let chunk: ChatChunk = serde_json::from_str(body)
        .map_err(|e| LlmError::MalformedResponse(format!("Failed to parse response: {}", e)))?;
    content_of(chunk)
}

/// Concatenate the `message.content` fragments of a line-delimited stream
///
/// Blank lines are skipped; fragments without content contribute nothing.
pub(crate) fn join_stream_fragments(body: &str) -> Result<String, LlmError> {
    let mut full = String::new();

    for (idx, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let chunk: ChatChunk = serde_json::from_str(line).map_err(|e| {
            LlmError::MalformedResponse(format!("Invalid stream fragment {}: {}", idx, e))
        })?;
        if let Some(error) = chunk.error {
            return Err(LlmError::Other(error));
        }
        if let Some(content) = chunk.message.and_then(|m| m.content) {
            full.push_str(&content);
        }
    }

    Ok(full)
}

fn content_of(chunk: ChatChunk) -> Result<String, LlmError> {
    if let Some(error) = chunk.error {
        return Err(LlmError::Other(error));
    }
    chunk
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| LlmError::MalformedResponse("Missing message.content".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new("http://localhost:11434/", "mistral").unwrap();
        assert_eq!(provider.endpoint, "http://localhost:11434");
        assert_eq!(provider.model(), "mistral");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_ollama_provider_default_endpoint() {
        let provider = OllamaProvider::default_endpoint("llama3").unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model(), "llama3");
    }

    #[test]
    fn test_ollama_provider_with_max_retries() {
        let provider = OllamaProvider::default_endpoint(DEFAULT_MODEL)
            .unwrap()
            .with_max_retries(5);
        assert_eq!(provider.max_retries, 5);

        let provider = provider.with_max_retries(0);
        assert_eq!(provider.max_retries, 1);

        let provider = provider.with_max_retries(40);
        assert_eq!(provider.max_retries, MAX_RETRIES_LIMIT);
    }

    #[test]
    fn test_backoff_delay_doubles() {
        let base = Duration::from_millis(100);
        assert_eq!(backoff_delay(base, 1), Duration::from_millis(100));
        assert_eq!(backoff_delay(base, 2), Duration::from_millis(200));
        assert_eq!(backoff_delay(base, 3), Duration::from_millis(400));
    }

    #[test]
    fn test_backoff_delay_saturates() {
        // 2^32 does not fit in a u32
        assert_eq!(backoff_delay(DEFAULT_BACKOFF_BASE, 33), DEFAULT_BACKOFF_BASE * u32::MAX);
        assert_eq!(backoff_delay(Duration::MAX, 40), Duration::MAX);
        assert_eq!(backoff_delay(DEFAULT_BACKOFF_BASE, 0), DEFAULT_BACKOFF_BASE);
    }

    #[test]
    fn test_total_backoff() {
        assert_eq!(total_backoff(DEFAULT_BACKOFF_BASE, 1), Duration::ZERO);
        assert_eq!(total_backoff(DEFAULT_BACKOFF_BASE, 3), Duration::from_secs(3));
        assert_eq!(total_backoff(DEFAULT_BACKOFF_BASE, 4), Duration::from_secs(7));
        assert_eq!(total_backoff(Duration::MAX, 5), Duration::MAX);
    }

    #[test]
    fn test_join_stream_fragments() {
        let body = concat!(
            r#"{"message":{"role":"assistant","content":"Sentiment: "},"done":false}"#,
            "\n",
            r#"{"message":{"role":"assistant","content":"Positive"},"done":false}"#,
            "\n\n",
            r#"{"done":true}"#,
            "\n",
        );
        assert_eq!(join_stream_fragments(body).unwrap(), "Sentiment: Positive");
    }

    #[test]
    fn test_join_stream_fragments_rejects_garbage() {
        let body = "{\"message\":{\"content\":\"ok\"}}\nnot json\n";
        assert!(matches!(
            join_stream_fragments(body),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_join_stream_fragments_surfaces_error_field() {
        let body = r#"{"error":"model 'nope' not found"}"#;
        match join_stream_fragments(body) {
            Err(LlmError::Other(msg)) => assert!(msg.contains("nope")),
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[test]
    fn test_join_stream_fragments_empty_body() {
        assert_eq!(join_stream_fragments("").unwrap(), "");
    }

    #[test]
    fn test_parse_whole_reply() {
        let body = r#"{"model":"mistral","message":{"role":"assistant","content":"SUMMARY: x"},"done":true}"#;
        assert_eq!(parse_whole_reply(body).unwrap(), "SUMMARY: x");
    }

    #[test]
    fn test_parse_whole_reply_missing_content() {
        assert!(matches!(
            parse_whole_reply(r#"{"done":true}"#),
            Err(LlmError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_whole_reply("<html>"),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_ollama_error_handling() {
        // Nothing listens on port 9 locally
        let provider = OllamaProvider::new("http://127.0.0.1:9", "mistral")
            .unwrap()
            .with_max_retries(1);

        let result = provider.chat("test", ResponseMode::Whole).await;

        match result {
            Err(LlmError::Transport(_)) => {} // Expected
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }
}
