//! Backend selection

use crate::config::{ClassifierBackend, ClassifierConfig};
use crate::error::ClassifierError;
use crate::keyword::KeywordClassifier;
use crate::model::ModelClassifier;
use parley_domain::{LlmProvider, TextClassifier};
use std::fmt::Display;
use tracing::info;

/// A classifier whose backend was fixed when it was built
pub enum Classifier<L> {
    /// Keyword tables only
    Keyword(KeywordClassifier),

    /// Model first, keyword tables as fallback
    Model(ModelClassifier<L>),
}

impl<L> Classifier<L>
where
    L: LlmProvider + Send + Sync,
    L::Error: Display + Send,
{
    /// Build the backend named in `config`
    ///
    /// The model backend needs a provider; the keyword backend ignores it.
    pub fn from_config(config: &ClassifierConfig, llm_provider: Option<L>) -> Result<Self, ClassifierError> {
        config.validate().map_err(ClassifierError::Config)?;

        let classifier = match (config.backend, llm_provider) {
            (ClassifierBackend::Keyword, _) => Self::Keyword(KeywordClassifier::new(config)),
            (ClassifierBackend::Model, Some(llm)) => Self::Model(ModelClassifier::new(llm, config)),
            (ClassifierBackend::Model, None) => {
                return Err(ClassifierError::Config(
                    "model backend requires an LLM provider".to_string(),
                ))
            }
        };

        info!("Using {} classifier", classifier.backend());
        Ok(classifier)
    }

    /// Backend in use
    pub fn backend(&self) -> ClassifierBackend {
        match self {
            Self::Keyword(_) => ClassifierBackend::Keyword,
            Self::Model(_) => ClassifierBackend::Model,
        }
    }
}

impl<L> TextClassifier for Classifier<L>
where
    L: LlmProvider + Send + Sync,
    L::Error: Display + Send,
{
    async fn classify(&self, text: &str, categories: &[String]) -> Option<String> {
        match self {
            Self::Keyword(classifier) => classifier.classify(text, categories).await,
            Self::Model(classifier) => classifier.classify(text, categories).await,
        }
    }
}
