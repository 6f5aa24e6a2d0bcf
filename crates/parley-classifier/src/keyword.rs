//! Keyword-table classifier
//!
//! A best-effort heuristic over static word lists. It has no notion of
//! meaning beyond the tables in [`crate::keywords`] and should not be read
//! as a statistically grounded classifier.

use crate::config::ClassifierConfig;
use crate::keywords::{related_words, GENERAL_TOPICS, TECH_INDICATORS};
use once_cell::sync::Lazy;
use parley_domain::TextClassifier;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tracing::debug;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Picks the best of a closed set of categories using keyword tables
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordClassifier {
    related_weight: f64,
    direct_match_score: f64,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl KeywordClassifier {
    /// Create a classifier with the weights from `config`
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            related_weight: config.related_weight,
            direct_match_score: config.direct_match_score,
        }
    }

    /// Choose one of `categories` for `text`
    ///
    /// Returns `None` when the text is blank or there are no categories.
    /// The returned string is always one of the candidates, spelled as
    /// given.
    pub fn best_category<S: AsRef<str>>(&self, text: &str, categories: &[S]) -> Option<String> {
        if text.trim().is_empty() || categories.is_empty() {
            return None;
        }
        if categories.len() == 1 {
            return Some(categories[0].as_ref().to_string());
        }

        let lowered = text.to_lowercase();
        let counts = word_counts(&lowered);

        if let Some(category) = tech_shortcut(&counts, categories) {
            debug!("Technology shortcut matched '{}'", category);
            return Some(category.to_string());
        }

        let scores: Vec<f64> = categories
            .iter()
            .map(|c| self.score(c.as_ref(), &counts))
            .collect();
        let best = first_max(&scores)?;

        if scores[best] > 0.0 {
            debug!("Keyword scores {:?}, picked '{}'", scores, categories[best].as_ref());
            return Some(categories[best].as_ref().to_string());
        }

        debug!("No keyword hits, scanning general topics");
        Some(self.by_general_topic(&counts, categories).to_string())
    }

    /// Category-word hits plus weighted related-word hits
    fn score(&self, category: &str, counts: &HashMap<String, usize>) -> f64 {
        let lowered = category.to_lowercase();
        let own: HashSet<&str> = WORD.find_iter(&lowered).map(|m| m.as_str()).collect();

        let direct: usize = own.iter().filter_map(|w| counts.get(*w)).sum();
        let related: usize = related_words(category)
            .iter()
            .filter_map(|w| counts.get(*w))
            .sum();

        direct as f64 + related as f64 * self.related_weight
    }

    /// Map the text to a broad topic, then the topic to a candidate
    fn by_general_topic<'a, S: AsRef<str>>(
        &self,
        counts: &HashMap<String, usize>,
        categories: &'a [S],
    ) -> &'a str {
        let topic_scores: Vec<f64> = GENERAL_TOPICS
            .iter()
            .map(|(_, words)| words.iter().filter(|w| counts.contains_key(**w)).count() as f64)
            .collect();

        let topic = match first_max(&topic_scores) {
            Some(i) if topic_scores[i] > 0.0 => GENERAL_TOPICS[i].0,
            _ => return categories[0].as_ref(),
        };
        debug!("General topic: {}", topic);

        let scores: Vec<f64> = categories
            .iter()
            .map(|c| {
                let lowered = c.as_ref().to_lowercase();
                if lowered.contains(topic) || topic.contains(lowered.as_str()) {
                    self.direct_match_score
                } else {
                    char_jaccard(topic, &lowered)
                }
            })
            .collect();

        first_max(&scores)
            .map(|i| categories[i].as_ref())
            .unwrap_or_else(|| categories[0].as_ref())
    }
}

impl TextClassifier for KeywordClassifier {
    async fn classify(&self, text: &str, categories: &[String]) -> Option<String> {
        self.best_category(text, categories)
    }
}

/// Occurrences of each `\w+` token in already-lowercased text
fn word_counts(lowered: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for m in WORD.find_iter(lowered) {
        *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// First candidate naming technology, when the text mentions a gadget word
fn tech_shortcut<'a, S: AsRef<str>>(
    counts: &HashMap<String, usize>,
    categories: &'a [S],
) -> Option<&'a str> {
    if !TECH_INDICATORS.iter().any(|w| counts.contains_key(*w)) {
        return None;
    }
    categories
        .iter()
        .map(|c| c.as_ref())
        .find(|c| c.to_lowercase().contains("tech"))
}

/// Index of the first maximum; earlier entries win ties
fn first_max(scores: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, score) in scores.iter().enumerate() {
        match best {
            Some(b) if *score <= scores[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Jaccard similarity of the character sets of two strings
pub fn char_jaccard(a: &str, b: &str) -> f64 {
    let left: HashSet<char> = a.chars().collect();
    let right: HashSet<char> = b.chars().collect();

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    left.intersection(&right).count() as f64 / union as f64
}
