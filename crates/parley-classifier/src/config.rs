//! Classifier configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which classifier answers `classify` calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// Static keyword tables, no model calls
    #[default]
    Keyword,

    /// Ask the model, fall back to keywords when it is unusable
    Model,
}

impl fmt::Display for ClassifierBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::Model => write!(f, "model"),
        }
    }
}

impl FromStr for ClassifierBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "model" => Ok(Self::Model),
            other => Err(format!("unknown classifier backend '{}'", other)),
        }
    }
}

/// Configuration for category classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Backend selected at startup
    pub backend: ClassifierBackend,

    /// Weight of a related-word hit relative to a category-word hit
    pub related_weight: f64,

    /// Score given to a category that contains the fallback topic name
    pub direct_match_score: f64,

    /// Request a streamed reply from the model backend
    pub stream: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::Keyword,
            related_weight: 0.5,
            direct_match_score: 10.0,
            stream: false,
        }
    }
}

impl ClassifierConfig {
    /// Configuration using the model backend
    pub fn model() -> Self {
        Self {
            backend: ClassifierBackend::Model,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.related_weight) {
            return Err(format!(
                "related_weight must be within 0.0-1.0, got {}",
                self.related_weight
            ));
        }
        if self.direct_match_score <= 1.0 {
            return Err("direct_match_score must be greater than 1.0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}
