//! Topic reply parsing

use crate::types::TopicResult;
use parley_domain::Topic;

/// Parse a topic reply into a single-token topic
///
/// The reply is split on runs of whitespace and `/` and the first token is
/// taken as is, punctuation included. An empty reply gives `Unknown`.
///
/// # Examples
///
/// ```
/// use parley_extractor::parse_topic;
///
/// assert_eq!(parse_topic("Technology/gadgets").topic.as_str(), "Technology");
/// assert_eq!(parse_topic("   ").topic.as_str(), "Unknown");
/// ```
pub fn parse_topic(raw: &str) -> TopicResult {
    raw.split(Topic::is_separator)
        .find(|token| !token.is_empty())
        .and_then(Topic::new)
        .map(TopicResult::new)
        .unwrap_or_else(TopicResult::unknown)
}
