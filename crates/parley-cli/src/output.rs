//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use parley_classifier::ClassifierBackend;
use parley_domain::Sentiment;
use parley_extractor::{SentimentResult, SummaryResult, TopicResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a sentiment result.
    pub fn format_sentiment(&self, result: &SentimentResult) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&result.to_json())?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Sentiment", "Rationale"]);
        builder.push_record([result.sentiment.as_str(), result.rationale.as_str()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut output = table.to_string();
        if !result.is_degraded() {
            let color = match result.sentiment {
                Sentiment::Positive => "green",
                Sentiment::Negative => "red",
                Sentiment::Neutral => "yellow",
            };
            output = format!("{}\n{}", self.colorize(result.sentiment.as_str(), color), output);
        }
        Ok(self.with_degradation(output, result.is_degraded(), result.error.as_deref()))
    }

    /// Format a summary result.
    pub fn format_summary(&self, result: &SummaryResult) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&result.to_json())?);
        }

        let mut output = result.text_summary.clone();
        if result.points.is_empty() {
            output.push_str("\n\n");
            output.push_str(&self.colorize("No key points.", "yellow"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["#", "Key point"]);
            for (i, point) in result.points.iter().enumerate() {
                builder.push_record([(i + 1).to_string(), point.clone()]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));

            output.push_str("\n\n");
            output.push_str(&table.to_string());
        }
        Ok(self.with_degradation(output, result.is_degraded(), result.error.as_deref()))
    }

    /// Format a topic result.
    pub fn format_topic(&self, result: &TopicResult) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&result.to_json())?);
        }

        let output = format!("Topic: {}", self.colorize(result.topic.as_str(), "cyan"));
        Ok(self.with_degradation(output, result.is_degraded(), result.error.as_deref()))
    }

    /// Format a chosen category.
    pub fn format_category(&self, category: &str, backend: ClassifierBackend) -> Result<String> {
        if self.format == OutputFormat::Json {
            let value = serde_json::json!({
                "category": category,
                "backend": backend.to_string(),
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        Ok(format!(
            "Category: {} ({} backend)",
            self.colorize(category, "cyan"),
            backend
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Append a warning line when the result is a fallback.
    fn with_degradation(&self, output: String, degraded: bool, reason: Option<&str>) -> String {
        if !degraded {
            return output;
        }
        let reason = reason.unwrap_or("unknown error");
        format!("{}\n{}", output, self.warning(&format!("Analysis degraded: {}", reason)))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
