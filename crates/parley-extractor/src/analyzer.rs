//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::ExtractorError;
use crate::parser::{parse_sentiment_with_limit, parse_summary, parse_topic};
use crate::prompt::{PromptBuilder, Task};
use crate::types::{SentimentResult, SummaryResult, TopicResult};
use parley_domain::{LlmProvider, ResponseMode};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Analyzer sends a task prompt to the model and parses the reply
///
/// Its public methods never fail: transport errors, timeouts, oversized
/// input and malformed payloads all come back as the failure variant of
/// the requested result, with the error message attached.
pub struct Analyzer<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: AnalyzerConfig,
}

impl<L> Clone for Analyzer<L>
where
    L: LlmProvider,
{
    fn clone(&self) -> Self {
        Self {
            llm_provider: Arc::clone(&self.llm_provider),
            config: self.config.clone(),
        }
    }
}

impl<L> Analyzer<L>
where
    L: LlmProvider + Send + Sync,
    L::Error: Into<ExtractorError>,
{
    /// Create a new Analyzer
    pub fn new(llm_provider: L, config: AnalyzerConfig) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classify the sentiment of `text`
    pub async fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        let prompt = PromptBuilder::new(Task::Sentiment, text).build();

        match self.request(text, &prompt, self.config.sentiment_mode()).await {
            Ok(raw) => parse_sentiment_with_limit(&raw, self.config.max_rationale_chars),
            Err(e) => {
                warn!("Error during sentiment analysis: {}", e);
                SentimentResult::failed(e)
            }
        }
    }

    /// Summarise `text` into a paragraph and key points
    pub async fn summarize(&self, text: &str) -> SummaryResult {
        let prompt = PromptBuilder::new(Task::Summary, text).build();

        match self.request(text, &prompt, self.config.summary_mode()).await {
            Ok(raw) => {
                let result = parse_summary(&raw);
                info!("Parsed summary with {} points", result.points.len());
                result
            }
            Err(e) => {
                warn!("Error during summarization: {}", e);
                SummaryResult::failed(e)
            }
        }
    }

    /// Name the topic of `text` in one word
    pub async fn classify_topic(&self, text: &str) -> TopicResult {
        let prompt = PromptBuilder::new(Task::Topic, text).build();

        match self.request(text, &prompt, self.config.topic_mode()).await {
            Ok(raw) => parse_topic(&raw),
            Err(e) => {
                warn!("Error during topic classification: {}", e);
                TopicResult::failed(e)
            }
        }
    }

    /// Check the input, call the provider within the call budget, return the raw reply
    async fn request(
        &self,
        text: &str,
        prompt: &str,
        mode: ResponseMode,
    ) -> Result<String, ExtractorError> {
        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(length, self.config.max_text_length));
        }

        debug!("Prompt length: {} chars, mode: {:?}", prompt.len(), mode);

        let reply = timeout(
            self.config.call_budget(),
            self.llm_provider.generate(prompt, mode),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)?
        .map_err(Into::<ExtractorError>::into)?;

        debug!("LLM response length: {} chars", reply.len());

        Ok(reply)
    }
}
