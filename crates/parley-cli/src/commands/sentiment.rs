//! Sentiment command implementation.

use crate::cli::TextArgs;
use crate::commands::{build_analyzer, read_input};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the sentiment command.
pub async fn execute_sentiment(args: TextArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(Some(&args.text), None)?;
    let analyzer = build_analyzer(config)?;

    let result = analyzer.analyze_sentiment(&text).await;

    println!("{}", formatter.format_sentiment(&result)?);
    Ok(())
}
