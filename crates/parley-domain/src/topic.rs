//! Topic module - single-token topic labels

use std::fmt;

/// Label used when a reply carried no topic at all
pub const UNKNOWN_TOPIC: &str = "Unknown";

/// Label used when the topic could not be obtained
pub const ERROR_TOPIC: &str = "Error";

/// A topic label made of exactly one token
///
/// The invariant is structural: a `Topic` is never empty and never contains
/// whitespace or `/`, so it can be printed or used as a key without further
/// cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Create a topic from a single token
    ///
    /// Returns `None` if the token is empty or contains whitespace or `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_domain::Topic;
    ///
    /// assert_eq!(Topic::new("Sports").unwrap().as_str(), "Sports");
    /// assert!(Topic::new("Sports news").is_none());
    /// assert!(Topic::new("tech/gadgets").is_none());
    /// ```
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() || token.chars().any(Self::is_separator) {
            return None;
        }
        Some(Self(token))
    }

    /// The placeholder topic for empty replies
    pub fn unknown() -> Self {
        Self(UNKNOWN_TOPIC.to_string())
    }

    /// The placeholder topic for failed requests
    pub fn error() -> Self {
        Self(ERROR_TOPIC.to_string())
    }

    /// Whether a character separates topic tokens
    pub fn is_separator(c: char) -> bool {
        c.is_whitespace() || c == '/'
    }

    /// Borrow the label
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `Unknown` placeholder
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_TOPIC
    }

    /// Consume the topic, returning the label
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Topic {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
