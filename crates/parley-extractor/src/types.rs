//! Result types produced from model replies
//!
//! Every result is built fresh from one reply and carries an optional
//! `error`. A result with `error` set is a degraded fallback: its other
//! fields hold the documented defaults, never partial garbage.

use parley_domain::{Sentiment, Topic};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Rationale used when the whole pipeline failed
pub const ERROR_RATIONALE: &str = "error in analysis";

/// Summary text used when the model returned nothing
pub const FAILED_SUMMARY: &str = "Failed to generate summary";

/// Summary text used when the reply had no `SUMMARY:` section
pub const NO_SUMMARY: &str = "No summary generated";

/// Sentiment label plus a one-sentence justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Detected sentiment
    #[serde(with = "sentiment_label")]
    pub sentiment: Sentiment,

    /// Short reason, always non-empty and closed with `.`, `!` or `?`
    pub rationale: String,

    /// Failure message when this is a fallback result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SentimentResult {
    /// Create a successful result
    pub fn new(sentiment: Sentiment, rationale: impl Into<String>) -> Self {
        Self {
            sentiment,
            rationale: rationale.into(),
            error: None,
        }
    }

    /// Neutral fallback carrying `error`
    pub fn failed(error: impl Display) -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            rationale: ERROR_RATIONALE.to_string(),
            error: Some(error.to_string()),
        }
    }

    /// Whether this result is a fallback
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// JSON view: `{"sentiment", "rationale", "error"?}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Condensed paragraph plus ordered key points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Summary paragraph, or a placeholder/error message
    pub text_summary: String,

    /// Key points in source order; may be empty
    #[serde(default)]
    pub points: Vec<String>,

    /// Failure message when this is a fallback result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummaryResult {
    /// Create a successful result
    pub fn new(text_summary: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            text_summary: text_summary.into(),
            points,
            error: None,
        }
    }

    /// Fallback with `Error: <message>` as the summary text
    pub fn failed(error: impl Display) -> Self {
        let message = error.to_string();
        Self {
            text_summary: format!("Error: {}", message),
            points: Vec::new(),
            error: Some(message),
        }
    }

    /// Fallback for a reply that contained no text
    pub fn empty(error: impl Display) -> Self {
        Self {
            text_summary: FAILED_SUMMARY.to_string(),
            points: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Whether this result is a fallback
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// JSON view: `{"summary": {"text_summary", "points", "error"?}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "summary": self })
    }
}

/// Single-token topic label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResult {
    /// The topic; `Unknown` for empty replies, `Error` on failure
    #[serde(rename = "Topic", with = "topic_label")]
    pub topic: Topic,

    /// Failure message when this is a fallback result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TopicResult {
    /// Create a successful result
    pub fn new(topic: Topic) -> Self {
        Self { topic, error: None }
    }

    /// The `Unknown` result for replies without a topic
    pub fn unknown() -> Self {
        Self::new(Topic::unknown())
    }

    /// The `Error` result carrying `error`
    pub fn failed(error: impl Display) -> Self {
        Self {
            topic: Topic::error(),
            error: Some(error.to_string()),
        }
    }

    /// Whether this result is a fallback
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// JSON view: `{"Topic", "error"?}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

mod sentiment_label {
    use parley_domain::Sentiment;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Sentiment, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Sentiment, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Sentiment::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid sentiment '{}'", raw)))
    }
}

mod topic_label {
    use parley_domain::Topic;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Topic, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Topic, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Topic::new(raw.clone()).ok_or_else(|| D::Error::custom(format!("invalid topic '{}'", raw)))
    }
}
