//! Classifier error types

use thiserror::Error;

/// Errors that can occur while setting up or running a classifier
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// Model call failed or gave an unusable reply
    #[error("Model error: {0}")]
    Model(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
