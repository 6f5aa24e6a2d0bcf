//! Parley CLI - Command-line interface for model-backed text analysis.

use clap::Parser;
use parley_cli::commands;
use parley_cli::cli::{ConfigAction, ConfigArgs};
use parley_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> parley_cli::Result<()> {
    let Cli {
        format,
        no_color,
        config: config_path,
        endpoint,
        model,
        command,
        ..
    } = cli;

    // Load config, falling back to defaults when no file exists
    let config_path = match config_path {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let resetting = matches!(
        command,
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { force: true }
        })
    );
    let mut config = if resetting {
        Config::load_from(&config_path).unwrap_or_default()
    } else {
        Config::load_from(&config_path)?
    };
    config.apply_overrides(endpoint, model);

    let format = format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match command {
        Command::Sentiment(args) => {
            commands::execute_sentiment(args, &config, &formatter).await?;
        }
        Command::Summarize(args) => {
            commands::execute_summarize(args, &config, &formatter).await?;
        }
        Command::Topic(args) => {
            commands::execute_topic(args, &config, &formatter).await?;
        }
        Command::Classify(args) => {
            commands::execute_classify(args, &config, &formatter).await?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
