//! Summary reply parsing
//!
//! Expected shape:
//!
//! ```text
//! SUMMARY: <paragraph>
//! POINTS:
//! - <first point>
//! - <second point>
//! ```
//!
//! The reply is split on the literal section markers rather than parsed as a
//! grammar, so extra preamble or slightly odd spacing is tolerated.

use crate::error::ExtractorError;
use crate::types::{SummaryResult, NO_SUMMARY};
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"SUMMARY:|POINTS:").expect("valid regex"));
static BULLET_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-\s*(.*)$").expect("valid regex"));

/// Parse a summary reply
///
/// Bullet rules for the `POINTS:` section:
/// - every line starting with `-` (after indentation) opens a new point;
///   nested bullets are flattened in source order
/// - a non-blank line without a dash continues the open point
/// - a blank line closes the open point; undashed text after it is ignored
///
/// # Examples
///
/// ```
/// use parley_extractor::parse_summary;
///
/// let result = parse_summary("SUMMARY: Short overview.\nPOINTS:\n- point one\n- point two");
/// assert_eq!(result.text_summary, "Short overview.");
/// assert_eq!(result.points, vec!["point one", "point two"]);
/// ```
pub fn parse_summary(raw: &str) -> SummaryResult {
    let raw = raw.trim();
    if raw.is_empty() {
        return SummaryResult::empty(ExtractorError::EmptyInput);
    }

    let sections: Vec<&str> = SECTION_MARKER.split(raw).collect();

    let text_summary = sections
        .get(1)
        .map(|body| body.trim().to_string())
        .unwrap_or_else(|| NO_SUMMARY.to_string());

    let points = sections
        .get(2)
        .map(|body| extract_points(body))
        .unwrap_or_default();

    SummaryResult::new(text_summary, points)
}

fn extract_points(body: &str) -> Vec<String> {
    let mut points = Vec::new();
    let mut open: Option<String> = None;

    for line in body.lines() {
        if let Some(caps) = BULLET_LINE.captures(line) {
            close_point(&mut open, &mut points);
            open = Some(caps[1].trim().to_string());
        } else if line.trim().is_empty() {
            close_point(&mut open, &mut points);
        } else if let Some(point) = open.as_mut() {
            if !point.is_empty() {
                point.push(' ');
            }
            point.push_str(line.trim());
        }
    }
    close_point(&mut open, &mut points);

    points
}

fn close_point(open: &mut Option<String>, points: &mut Vec<String>) {
    if let Some(point) = open.take() {
        let point = point.trim();
        if !point.is_empty() {
            points.push(point.to_string());
        }
    }
}
