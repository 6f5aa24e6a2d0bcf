//! Parse free-form model replies into typed results
//!
//! The parsers are pure functions over the reply text: no I/O, no shared
//! state, and no panics on any input. Identical input always yields an
//! identical result.

mod sentiment;
mod summary;
mod topic;

pub use sentiment::{parse_sentiment, parse_sentiment_with_limit, MAX_RATIONALE_CHARS, NO_REASON_RATIONALE};
pub use summary::parse_summary;
pub use topic::parse_topic;
