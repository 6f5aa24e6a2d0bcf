//! Topic command implementation.

use crate::cli::TextArgs;
use crate::commands::{build_analyzer, read_input};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the topic command.
pub async fn execute_topic(args: TextArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(Some(&args.text), None)?;
    let analyzer = build_analyzer(config)?;

    let result = analyzer.classify_topic(&text).await;

    println!("{}", formatter.format_topic(&result)?);
    Ok(())
}
