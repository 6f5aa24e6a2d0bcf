//! Command implementations.

pub mod classify;
pub mod config;
pub mod sentiment;
pub mod summarize;
pub mod topic;

pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::sentiment::execute_sentiment;
pub use self::summarize::execute_summarize;
pub use self::topic::execute_topic;

use crate::config::Config;
use crate::error::{CliError, Result};
use parley_extractor::Analyzer;
use parley_llm::OllamaProvider;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Resolve the input text.
///
/// A file wins over inline text; inline `-` or no text at all reads stdin.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    let input = match (file, text) {
        (Some(path), _) => fs::read_to_string(path)?,
        (None, Some(text)) if text != "-" => text.to_string(),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if input.trim().is_empty() {
        return Err(CliError::InvalidInput("no input text".to_string()));
    }
    Ok(input)
}

/// Build an Analyzer talking to the configured Ollama endpoint.
pub fn build_analyzer(config: &Config) -> Result<Analyzer<OllamaProvider>> {
    let provider = config
        .analyzer
        .ollama_provider()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(Analyzer::new(provider, config.analyzer.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[test]
    fn test_inline_text() {
        assert_eq!(read_input(Some("hello"), None).unwrap(), "hello");
    }

    #[test]
    fn test_file_wins() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "from file").unwrap();

        let input = read_input(Some("inline"), Some(file.path())).unwrap();
        assert_eq!(input, "from file");
    }

    #[test]
    fn test_blank_input_rejected() {
        assert!(matches!(read_input(Some("   "), None), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = read_input(None, Some(Path::new("/nonexistent/parley/input.txt")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_build_analyzer_checks_config() {
        let mut config = Config::default();
        assert!(build_analyzer(&config).is_ok());

        config.analyzer.model = String::new();
        assert!(matches!(build_analyzer(&config), Err(CliError::Config(_))));
    }
}
