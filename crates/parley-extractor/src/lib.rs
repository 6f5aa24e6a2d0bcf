//! Parley Extractor
//!
//! Turns loosely-structured model replies into typed results.
//!
//! # Overview
//!
//! Three tasks are supported, each with a prompt builder and a tolerant
//! parser:
//!
//! - **Sentiment**: `Sentiment: <label>` / `Rationale: <text>` → [`SentimentResult`]
//! - **Summary**: `SUMMARY:` / `POINTS:` / `- <point>` → [`SummaryResult`]
//! - **Topic**: a one-word answer → [`TopicResult`]
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → LlmProvider → raw reply → parser → Result
//! ```
//!
//! The parsers are pure and can be used on their own. The [`Analyzer`] adds
//! the provider call, a timeout and error folding, so callers always get a
//! well-formed result back.
//!
//! # Example Usage
//!
//! ```no_run
//! use parley_extractor::{Analyzer, AnalyzerConfig};
//! use parley_llm::MockProvider;
//!
//! # async fn example() {
//! let llm = MockProvider::new("Sentiment: Positive\nRationale: lottery win.");
//! let analyzer = Analyzer::new(llm, AnalyzerConfig::default());
//!
//! let result = analyzer.analyze_sentiment("I won the lottery").await;
//! println!("{}", result.to_json());
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;
mod types;


pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::ExtractorError;
pub use parser::{
    parse_sentiment, parse_sentiment_with_limit, parse_summary, parse_topic, MAX_RATIONALE_CHARS,
    NO_REASON_RATIONALE,
};
pub use prompt::{PromptBuilder, Task};
pub use types::{
    SentimentResult, SummaryResult, TopicResult, ERROR_RATIONALE, FAILED_SUMMARY, NO_SUMMARY,
};
