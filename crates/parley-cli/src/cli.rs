//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parley CLI - Ask a local model about a piece of text.
#[derive(Debug, Parser)]
#[command(name = "parley")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ollama endpoint (overrides the config file)
    #[arg(long, env = "PARLEY_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Model name (overrides the config file)
    #[arg(short, long, env = "PARLEY_MODEL", global = true)]
    pub model: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify the sentiment of a text
    Sentiment(TextArgs),

    /// Summarize a text into a paragraph and key points
    Summarize(SummarizeArgs),

    /// Name the topic of a text in one word
    Topic(TextArgs),

    /// Pick one of the given categories for a text
    Classify(ClassifyArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for commands taking a single text.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Text to analyze ("-" reads stdin)
    pub text: String,
}

/// Arguments for the summarize command.
#[derive(Debug, Parser)]
pub struct SummarizeArgs {
    /// Text to summarize (omit or "-" to read stdin)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Text to classify ("-" reads stdin)
    pub text: String,

    /// Candidate category (repeat or comma-separate)
    #[arg(long = "category", required = true, value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Classifier backend (overrides the config file)
    #[arg(short, long, value_enum)]
    pub backend: Option<BackendArg>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Classifier backend argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BackendArg {
    /// Keyword tables only
    Keyword,
    /// Ask the model, fall back to keywords
    Model,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<BackendArg> for parley_classifier::ClassifierBackend {
    fn from(backend: BackendArg) -> Self {
        match backend {
            BackendArg::Keyword => parley_classifier::ClassifierBackend::Keyword,
            BackendArg::Model => parley_classifier::ClassifierBackend::Model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_classifier::ClassifierBackend;

    #[test]
    fn test_sentiment_command() {
        let cli = Cli::parse_from(["parley", "sentiment", "I won the lottery"]);
        match cli.command {
            Command::Sentiment(args) => assert_eq!(args.text, "I won the lottery"),
            _ => panic!("Expected Sentiment command"),
        }
    }

    #[test]
    fn test_summarize_from_file() {
        let cli = Cli::parse_from(["parley", "summarize", "--file", "article.txt"]);
        match cli.command {
            Command::Summarize(args) => {
                assert!(args.text.is_none());
                assert_eq!(args.file, Some(PathBuf::from("article.txt")));
            }
            _ => panic!("Expected Summarize command"),
        }
    }

    #[test]
    fn test_summarize_text_and_file_conflict() {
        let result = Cli::try_parse_from(["parley", "summarize", "some text", "--file", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_classify_categories() {
        let cli = Cli::parse_from([
            "parley",
            "classify",
            "The team won",
            "--category",
            "food",
            "--category",
            "sports,travel",
            "--backend",
            "model",
        ]);
        match cli.command {
            Command::Classify(args) => {
                assert_eq!(args.categories, vec!["food", "sports", "travel"]);
                assert_eq!(args.backend, Some(BackendArg::Model));
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_classify_requires_category() {
        assert!(Cli::try_parse_from(["parley", "classify", "The team won"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "parley", "topic", "text", "--format", "json", "--no-color", "--model", "llama3", "-v",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert_eq!(cli.model.as_deref(), Some("llama3"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["parley", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_conversions() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);

        let backend: ClassifierBackend = BackendArg::Keyword.into();
        assert_eq!(backend, ClassifierBackend::Keyword);
    }
}
