//! Summarize command implementation.

use crate::cli::SummarizeArgs;
use crate::commands::{build_analyzer, read_input};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tracing::debug;

/// Execute the summarize command.
pub async fn execute_summarize(args: SummarizeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(args.text.as_deref(), args.file.as_deref())?;
    debug!("Summarizing {} words", text.split_whitespace().count());

    let analyzer = build_analyzer(config)?;
    let result = analyzer.summarize(&text).await;

    println!("{}", formatter.format_summary(&result)?);
    Ok(())
}
