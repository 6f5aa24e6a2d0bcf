//! Parley Classifier
//!
//! Picks one category out of a caller-supplied list.
//!
//! Two backends implement [`TextClassifier`]:
//! - [`KeywordClassifier`]: static keyword tables, no model calls
//! - [`ModelClassifier`]: asks the model, falls back to keywords
//!
//! [`Classifier`] wraps whichever one [`ClassifierConfig::backend`] names.
//!
//! # Examples
//!
//! ```
//! use parley_classifier::KeywordClassifier;
//!
//! let classifier = KeywordClassifier::default();
//! let category = classifier.best_category(
//!     "I like cheese and pasta with tomato sauce",
//!     &["food", "learning", "technology", "sports"],
//! );
//! assert_eq!(category.as_deref(), Some("food"));
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod keyword;
pub mod keywords;
mod model;


pub use classifier::Classifier;
pub use config::{ClassifierBackend, ClassifierConfig};
pub use error::ClassifierError;
pub use keyword::{char_jaccard, KeywordClassifier};
pub use model::{classification_prompt, pick_named_category, ModelClassifier};
pub use parley_domain::TextClassifier;
