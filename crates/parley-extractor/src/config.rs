//! Configuration for the Analyzer

use crate::error::ExtractorError;
use crate::parser::MAX_RATIONALE_CHARS;
use parley_domain::ResponseMode;
use parley_llm::ollama::{
    total_backoff, DEFAULT_BACKOFF_BASE, DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, MAX_RETRIES_LIMIT,
};
use parley_llm::OllamaProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Analyzer and the provider it talks to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Ollama API endpoint
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Request a streamed reply for sentiment analysis
    pub stream_sentiment: bool,

    /// Request a streamed reply for summaries
    pub stream_summary: bool,

    /// Request a streamed reply for topic classification
    pub stream_topic: bool,

    /// Maximum time for a single model call (seconds)
    pub request_timeout_secs: u64,

    /// Attempts per model call before giving up
    pub max_retries: u32,

    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Maximum rationale length (characters, closing punctuation included)
    pub max_rationale_chars: usize,
}

impl AnalyzerConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Deadline for one analysis call, retries included
    ///
    /// Every attempt may use the full request timeout and sleep the backoff
    /// before the next one, so a single timeout would cut retries short.
    pub fn call_budget(&self) -> Duration {
        let attempts = self.max_retries.clamp(1, MAX_RETRIES_LIMIT);
        self.request_timeout()
            .saturating_mul(attempts)
            .saturating_add(total_backoff(DEFAULT_BACKOFF_BASE, attempts))
    }

    /// Response mode for sentiment requests
    pub fn sentiment_mode(&self) -> ResponseMode {
        ResponseMode::from_streaming(self.stream_sentiment)
    }

    /// Response mode for summary requests
    pub fn summary_mode(&self) -> ResponseMode {
        ResponseMode::from_streaming(self.stream_summary)
    }

    /// Response mode for topic requests
    pub fn topic_mode(&self) -> ResponseMode {
        ResponseMode::from_streaming(self.stream_topic)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(format!("endpoint must be an http(s) URL, got '{}'", self.endpoint));
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be greater than 0".to_string());
        }
        if self.max_retries > MAX_RETRIES_LIMIT {
            return Err(format!("max_retries must be at most {}", MAX_RETRIES_LIMIT));
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.max_rationale_chars < 10 {
            return Err("max_rationale_chars must be at least 10".to_string());
        }
        Ok(())
    }

    /// Build the Ollama provider described by this configuration
    pub fn ollama_provider(&self) -> Result<OllamaProvider, ExtractorError> {
        self.validate().map_err(ExtractorError::Config)?;
        let provider = OllamaProvider::with_timeout(&self.endpoint, &self.model, self.request_timeout())
            .map_err(|e| ExtractorError::Config(e.to_string()))?;
        Ok(provider.with_max_retries(self.max_retries))
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    /// Local Ollama with `mistral`; sentiment streams, the others do not
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            stream_sentiment: true,
            stream_summary: false,
            stream_topic: false,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            max_text_length: 50_000,
            max_rationale_chars: MAX_RATIONALE_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sentiment_mode(), ResponseMode::Streaming);
        assert_eq!(config.summary_mode(), ResponseMode::Whole);
        assert_eq!(config.topic_mode(), ResponseMode::Whole);
    }

    #[test]
    fn test_call_budget_covers_retries() {
        let mut config = AnalyzerConfig::default();
        config.request_timeout_secs = 1;
        config.max_retries = 3;
        // three 1s attempts plus 1s and 2s of backoff
        assert_eq!(config.call_budget(), Duration::from_secs(6));

        config.max_retries = 1;
        assert_eq!(config.call_budget(), config.request_timeout());
    }

    #[test]
    fn test_max_retries_bounded() {
        let mut config = AnalyzerConfig::default();
        config.max_retries = MAX_RETRIES_LIMIT;
        assert!(config.validate().is_ok());

        config.max_retries = 100;
        assert!(config.validate().is_err());
        assert!(config.ollama_provider().is_err());
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut config = AnalyzerConfig::default();
        config.endpoint = "localhost:11434".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_limits() {
        let mut config = AnalyzerConfig::default();
        config.max_text_length = 0;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.max_rationale_chars = 3;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AnalyzerConfig::from_toml("model = \"llama3\"\nstream_summary = true\n").unwrap();
        assert_eq!(config.model, "llama3");
        assert!(config.stream_summary);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.max_rationale_chars, MAX_RATIONALE_CHARS);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalyzerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_ollama_provider_rejects_invalid_config() {
        let mut config = AnalyzerConfig::default();
        config.model = String::new();
        assert!(matches!(config.ollama_provider(), Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_ollama_provider_uses_model() {
        let mut config = AnalyzerConfig::default();
        config.model = "llama3".to_string();
        let provider = config.ollama_provider().unwrap();
        assert_eq!(provider.model(), "llama3");
    }
}
