//! Model-backed classifier

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::keyword::KeywordClassifier;
use parley_domain::{LlmProvider, ResponseMode, TextClassifier};
use regex::Regex;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};

/// Asks the model to choose a category
///
/// Falls back to the [`KeywordClassifier`] when the call fails or the reply
/// names none of the candidates, so `classify` still returns a candidate
/// for any non-empty input.
pub struct ModelClassifier<L> {
    llm_provider: Arc<L>,
    mode: ResponseMode,
    fallback: KeywordClassifier,
}

impl<L> Clone for ModelClassifier<L> {
    fn clone(&self) -> Self {
        Self {
            llm_provider: Arc::clone(&self.llm_provider),
            mode: self.mode,
            fallback: self.fallback.clone(),
        }
    }
}

impl<L> ModelClassifier<L>
where
    L: LlmProvider + Send + Sync,
    L::Error: Display + Send,
{
    /// Create a model-backed classifier
    pub fn new(llm_provider: L, config: &ClassifierConfig) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            mode: ResponseMode::from_streaming(config.stream),
            fallback: KeywordClassifier::new(config),
        }
    }

    /// Ask the model, without falling back
    pub async fn ask<S: AsRef<str> + Sync>(
        &self,
        text: &str,
        categories: &[S],
    ) -> Result<String, ClassifierError> {
        let prompt = classification_prompt(text, categories);
        let reply = self
            .llm_provider
            .generate(&prompt, self.mode)
            .await
            .map_err(|e| ClassifierError::Model(e.to_string()))?;

        debug!("Classifier reply: {:?}", reply);

        pick_named_category(&reply, categories)
            .map(str::to_string)
            .ok_or_else(|| ClassifierError::Model(format!("reply names no candidate: {}", reply.trim())))
    }
}

impl<L> TextClassifier for ModelClassifier<L>
where
    L: LlmProvider + Send + Sync,
    L::Error: Display + Send,
{
    async fn classify(&self, text: &str, categories: &[String]) -> Option<String> {
        if text.trim().is_empty() || categories.is_empty() {
            return None;
        }
        if categories.len() == 1 {
            return Some(categories[0].clone());
        }

        match self.ask(text, categories).await {
            Ok(category) => Some(category),
            Err(e) => {
                warn!("Model classification failed, using keywords: {}", e);
                self.fallback.best_category(text, categories)
            }
        }
    }
}

/// Prompt listing the candidates and asking for exactly one of them
pub fn classification_prompt<S: AsRef<str>>(text: &str, categories: &[S]) -> String {
    let list = categories
        .iter()
        .map(|c| format!("- {}", c.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Classify the text into exactly one of the following categories:\n\
         {list}\n\n\
         Reply with the category name only, spelled exactly as listed.\n\n\
         Text: {text}\n\n\
         Category:"
    )
}

/// The candidate the reply names first (case-insensitive, whole words)
///
/// A candidate only counts where it stands on word boundaries, so "art"
/// is not found inside "smartphones". When several candidates occur at the
/// same position the longer name wins, so "sports news" beats "sports".
pub fn pick_named_category<'a, S: AsRef<str>>(reply: &str, categories: &'a [S]) -> Option<&'a str> {
    categories
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| !c.trim().is_empty())
        .filter_map(|c| whole_word_position(reply, c).map(|pos| (pos, c)))
        .min_by(|(a_pos, a), (b_pos, b)| a_pos.cmp(b_pos).then(b.len().cmp(&a.len())))
        .map(|(_, c)| c)
}

/// Byte offset of the first whole-word, case-insensitive match of `name`
fn whole_word_position(haystack: &str, name: &str) -> Option<usize> {
    let name = name.trim();
    // `\b` only anchors next to word characters; "C++" keeps an open right edge
    let boundary = |c: Option<char>| match c {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => "",
    };
    let pattern = format!(
        "(?i){}{}{}",
        boundary(name.chars().next()),
        regex::escape(name),
        boundary(name.chars().last())
    );

    match Regex::new(&pattern) {
        Ok(re) => re.find(haystack).map(|m| m.start()),
        Err(e) => {
            warn!("Skipping category '{}': {}", name, e);
            None
        }
    }
}
