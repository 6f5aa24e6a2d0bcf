//! Sentiment module - the three-way sentiment label

use std::fmt;

/// Sentiment expressed by a piece of text
///
/// The set is closed: anything a model says that does not map onto one of
/// these labels is treated as `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sentiment {
    /// Favourable, optimistic or approving
    Positive,

    /// Unfavourable, pessimistic or disapproving
    Negative,

    /// Factual, mixed or undetermined
    #[default]
    Neutral,
}

impl Sentiment {
    /// All labels in detection priority order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Get the label as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sentiment: {}", s))
    }
}
