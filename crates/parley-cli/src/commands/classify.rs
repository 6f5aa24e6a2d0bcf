//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::commands::read_input;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use parley_classifier::{Classifier, ClassifierBackend, TextClassifier};
use parley_llm::OllamaProvider;

/// Execute the classify command.
pub async fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let (category, backend) = classify(args, config).await?;
    println!("{}", formatter.format_category(&category, backend)?);
    Ok(())
}

/// Pick a category with the configured (or overridden) backend.
pub async fn classify(args: ClassifyArgs, config: &Config) -> Result<(String, ClassifierBackend)> {
    let text = read_input(Some(&args.text), None)?;

    let categories: Vec<String> = args
        .categories
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    if categories.is_empty() {
        return Err(CliError::InvalidInput("at least one category is required".to_string()));
    }

    let mut classifier_config = config.classifier.clone();
    if let Some(backend) = args.backend {
        classifier_config.backend = backend.into();
    }

    let provider: Option<OllamaProvider> = match classifier_config.backend {
        ClassifierBackend::Model => Some(
            config
                .analyzer
                .ollama_provider()
                .map_err(|e| CliError::Config(e.to_string()))?,
        ),
        ClassifierBackend::Keyword => None,
    };

    let classifier = Classifier::from_config(&classifier_config, provider)
        .map_err(|e| CliError::Config(e.to_string()))?;

    let category = classifier
        .classify(&text, &categories)
        .await
        .ok_or_else(|| CliError::InvalidInput("text could not be classified".to_string()))?;

    Ok((category, classifier.backend()))
}
