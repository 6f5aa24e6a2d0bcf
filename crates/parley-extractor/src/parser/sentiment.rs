//! Sentiment reply parsing
//!
//! The model is asked to answer with
//!
//! ```text
//! Sentiment: <Positive|Negative|Neutral>
//! Rationale: <short explanation>
//! ```
//!
//! but replies drift: extra prose, missing labels, no trailing period, long
//! run-on explanations. Matching is done on an ASCII-lowercased copy so byte
//! offsets stay valid for slicing the original text.

use crate::types::SentimentResult;
use parley_domain::Sentiment;

/// Upper bound on rationale length, closing punctuation included
pub const MAX_RATIONALE_CHARS: usize = 100;

/// Rationale used when the reply holds no usable explanation
pub const NO_REASON_RATIONALE: &str = "no specific reason provided.";

const RATIONALE_MARKER: &str = "rationale:";
const SENTIMENT_MARKER: &str = "sentiment:";
const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Parse a sentiment reply with the default rationale limit
///
/// # Examples
///
/// ```
/// use parley_extractor::parse_sentiment;
/// use parley_domain::Sentiment;
///
/// let result = parse_sentiment("Sentiment: Negative\nRationale: poor quality product.");
/// assert_eq!(result.sentiment, Sentiment::Negative);
/// assert_eq!(result.rationale, "poor quality product.");
/// ```
pub fn parse_sentiment(raw: &str) -> SentimentResult {
    parse_sentiment_with_limit(raw, MAX_RATIONALE_CHARS)
}

/// Parse a sentiment reply, capping the rationale at `max_chars` characters
pub fn parse_sentiment_with_limit(raw: &str, max_chars: usize) -> SentimentResult {
    let lowered = raw.to_ascii_lowercase();
    let sentiment = detect_sentiment(&lowered);

    let rationale = match lowered.find(RATIONALE_MARKER) {
        Some(pos) => rationale_after_marker(&raw[pos + RATIONALE_MARKER.len()..]),
        None => rationale_from_body(&lowered),
    };

    let rationale = if rationale.chars().any(char::is_alphanumeric) {
        fit_rationale(&rationale, max_chars)
    } else {
        NO_REASON_RATIONALE.to_string()
    };

    SentimentResult::new(sentiment, rationale)
}

/// First `sentiment: <label>` match in priority order, else neutral
fn detect_sentiment(lowered: &str) -> Sentiment {
    Sentiment::ALL
        .into_iter()
        .find(|s| lowered.contains(&format!("{} {}", SENTIMENT_MARKER, s.as_str())))
        .unwrap_or_default()
}

/// Text after the marker, up to and including the first period
fn rationale_after_marker(after: &str) -> String {
    match after.find('.') {
        Some(dot) => format!("{}.", after[..dot].trim()),
        None => after.trim().to_string(),
    }
}

/// First sentence of the reply once the label words are removed
fn rationale_from_body(lowered: &str) -> String {
    let mut cleaned = lowered.to_string();
    for term in ["positive", "negative", "neutral", SENTIMENT_MARKER] {
        cleaned = cleaned.replace(term, "");
    }

    cleaned
        .split('.')
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Close the sentence and keep it within `max_chars`, cutting on whitespace
fn fit_rationale(rationale: &str, max_chars: usize) -> String {
    let closed = close_sentence(rationale.trim());
    if closed.chars().count() <= max_chars {
        return closed;
    }

    // Cutting at a space inside the window leaves room for the closing period.
    let window: String = closed.chars().take(max_chars).collect();
    let at_word = match window.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => window[..idx]
            .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-'))
            .to_string(),
        _ => String::new(),
    };
    if !at_word.is_empty() {
        return close_sentence(&at_word);
    }

    // A single oversized word: hard cut, one character short.
    let hard: String = closed.chars().take(max_chars.saturating_sub(1)).collect();
    close_sentence(hard.trim_end())
}

fn close_sentence(text: &str) -> String {
    match text.chars().last() {
        Some(last) if !TERMINAL_PUNCTUATION.contains(&last) => format!("{}.", text),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_reply() {
        let result = parse_sentiment("Sentiment: Negative\nRationale: poor quality product.");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.rationale, "poor quality product.");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_marker_case_is_ignored() {
        let result = parse_sentiment("SENTIMENT: POSITIVE\nRATIONALE: Winning feels great.");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.rationale, "Winning feels great.");
    }

    #[test]
    fn test_rationale_keeps_original_case() {
        let result = parse_sentiment("Sentiment: Positive\nRationale: The Jets WIN the Superbowl.");
        assert_eq!(result.rationale, "The Jets WIN the Superbowl.");
    }

    #[test]
    fn test_priority_order() {
        // Positive is checked before negative
        let reply = "Sentiment: Negative at first, then Sentiment: Positive overall";
        assert_eq!(parse_sentiment(reply).sentiment, Sentiment::Positive);

        let reply = "Sentiment: Neutral? No. Sentiment: Negative.";
        assert_eq!(parse_sentiment(reply).sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_no_marker_defaults_to_neutral() {
        let result = parse_sentiment("The text is mostly upbeat. It mentions a lottery.");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.rationale, "the text is mostly upbeat.");
    }

    #[test]
    fn test_rationale_up_to_first_period() {
        let result = parse_sentiment("Sentiment: Positive\nRationale:   expresses joy . Also more text.");
        assert_eq!(result.rationale, "expresses joy.");
    }

    #[test]
    fn test_rationale_without_period_gets_one() {
        let result = parse_sentiment("Sentiment: Neutral\nRationale: factual statement");
        assert_eq!(result.rationale, "factual statement.");
    }

    #[test]
    fn test_rationale_keeps_exclamation() {
        let result = parse_sentiment("Sentiment: Positive\nRationale: what a win!");
        assert_eq!(result.rationale, "what a win!");
    }

    #[test]
    fn test_long_rationale_is_cut_on_word_boundary() {
        let words = "word ".repeat(40);
        let reply = format!("Sentiment: Positive\nRationale: {}", words);
        let result = parse_sentiment(&reply);

        assert!(result.rationale.chars().count() <= MAX_RATIONALE_CHARS);
        assert!(result.rationale.ends_with("word."));
        assert!(!result.rationale.contains("wor."));
    }

    #[test]
    fn test_long_single_word_is_hard_cut() {
        let reply = format!("Rationale: {}", "x".repeat(250));
        let result = parse_sentiment(&reply);
        assert_eq!(result.rationale.chars().count(), MAX_RATIONALE_CHARS);
        assert!(result.rationale.ends_with('.'));
    }

    #[test]
    fn test_exactly_at_limit_without_period() {
        let reply = format!("Rationale: {}", "ab ".repeat(33) + "a");
        let result = parse_sentiment(&reply);
        assert!(result.rationale.chars().count() <= MAX_RATIONALE_CHARS);
        assert!(result.rationale.ends_with('.'));
    }

    #[test]
    fn test_custom_limit() {
        let result = parse_sentiment_with_limit("Rationale: one two three four five six", 15);
        assert_eq!(result.rationale, "one two three.");
    }

    #[test]
    fn test_empty_reply() {
        let result = parse_sentiment("");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.rationale, NO_REASON_RATIONALE);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_only_labels_falls_back_to_placeholder() {
        let result = parse_sentiment("Sentiment: Positive");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.rationale, NO_REASON_RATIONALE);

        let result = parse_sentiment("Sentiment: Negative\nRationale: .");
        assert_eq!(result.rationale, NO_REASON_RATIONALE);
    }

    #[test]
    fn test_default_output_is_a_fixed_point() {
        let first = parse_sentiment("");
        let second = parse_sentiment(&first.rationale);
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_ascii_text_is_safe() {
        let result = parse_sentiment("Sentiment: Positive\nRationale: très bien — ça marche");
        assert_eq!(result.rationale, "très bien — ça marche.");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any input yields a closed, bounded, non-empty rationale
        #[test]
        fn test_rationale_invariants(raw in "\\PC{0,400}") {
            let result = parse_sentiment(&raw);
            prop_assert!(!result.rationale.is_empty());
            prop_assert!(result.rationale.chars().count() <= MAX_RATIONALE_CHARS);
            let last = result.rationale.chars().last().unwrap();
            prop_assert!(TERMINAL_PUNCTUATION.contains(&last));
        }

        /// Property: a formatted positive reply is always detected
        #[test]
        fn test_positive_reply_detected(reason in "[a-z]{1,8}( [a-z]{1,8}){0,5}") {
            let raw = format!("Sentiment: Positive\nRationale: {}.", reason);
            let result = parse_sentiment(&raw);
            prop_assert_eq!(result.sentiment, Sentiment::Positive);
            prop_assert_eq!(result.rationale, format!("{}.", reason));
        }
    }
}
