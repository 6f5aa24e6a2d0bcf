//! Parley Domain Layer
//!
//! This crate contains the value types and capability traits shared by every
//! other Parley crate. It has ZERO external dependencies: the model transport,
//! the reply parsers and the classifiers all live in other crates and only
//! meet here.
//!
//! ## Key Concepts
//!
//! - **Sentiment**: Closed three-way label (positive / negative / neutral)
//! - **Topic**: A single-token topic label (no whitespace, no slashes)
//! - **ResponseMode**: Whether the model reply is streamed or returned whole
//! - **LlmProvider**: The upstream "prompt in, raw text out" collaborator
//! - **TextClassifier**: Picks one category out of a closed candidate list

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sentiment;
pub mod topic;
pub mod traits;

// Re-exports for convenience
pub use sentiment::Sentiment;
pub use topic::Topic;
pub use traits::{LlmProvider, ResponseMode, TextClassifier};
