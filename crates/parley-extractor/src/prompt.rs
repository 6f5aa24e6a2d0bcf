//! LLM prompt engineering for the analysis tasks

/// Word count from which a text is summarised as "long"
pub const LONG_TEXT_WORDS: usize = 500;

/// Analysis task a prompt is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Sentiment label plus rationale
    Sentiment,
    /// Summary paragraph plus bullet points
    Summary,
    /// One-word topic
    Topic,
}

/// Builds prompts whose reply format matches the parsers
pub struct PromptBuilder {
    task: Task,
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(task: Task, text: impl Into<String>) -> Self {
        Self {
            task,
            text: text.into(),
        }
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        match self.task {
            Task::Sentiment => self.sentiment_prompt(),
            Task::Summary => self.summary_prompt(),
            Task::Topic => self.topic_prompt(),
        }
    }

    fn sentiment_prompt(&self) -> String {
        let mut prompt = String::from(SENTIMENT_INSTRUCTIONS);
        prompt.push_str("\n\n");
        prompt.push_str(&format!("Text: \"{}\"\n", self.text));
        prompt
    }

    fn summary_prompt(&self) -> String {
        let (paragraph, points) = if self.is_long() {
            ("a concise paragraph summary (4-5 sentences maximum)", "5-7 key bullet points")
        } else {
            ("a very concise paragraph summary (2-3 sentences maximum)", "3-4 key bullet points")
        };

        let mut prompt = String::new();
        prompt.push_str(SUMMARY_ROLE);
        prompt.push_str("\n\n");
        prompt.push_str(&format!("Create:\n1. {}\n2. {}\n\n", paragraph, points));
        prompt.push_str(SUMMARY_RULES);
        prompt.push_str("\n\nText to summarize:\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n\n");
        prompt.push_str(SUMMARY_FORMAT);
        prompt
    }

    fn topic_prompt(&self) -> String {
        let mut prompt = String::from(TOPIC_INSTRUCTIONS);
        prompt.push_str("\n\nText:\n---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\nTopic:");
        prompt
    }

    fn is_long(&self) -> bool {
        self.text.split_whitespace().count() >= LONG_TEXT_WORDS
    }
}

const SENTIMENT_INSTRUCTIONS: &str = r#"Analyze the sentiment of the following text and provide:
1. The sentiment as ONLY ONE WORD: "Positive", "Negative", or "Neutral"
2. A brief rationale (2-5 words) explaining why you classified it that way

Format your response exactly like this:
Sentiment: [your one-word sentiment]
Rationale: [your brief explanation]"#;

const SUMMARY_ROLE: &str = "You are an expert text summarizer. Your task is to create a highly condensed summary of the following text that captures the essential information while being significantly shorter than the original.";

const SUMMARY_RULES: &str = r#"Your summary must:
- Be at least 75% shorter than the original text
- Focus only on the most important information
- Eliminate all redundancy and unnecessary details
- Use simple, direct language
- Maintain the core meaning and key takeaways
- NOT be a mere rewording of the original text

The bullet points must:
- Each cover a distinct, important aspect of the text
- Be non-redundant (no overlapping information)
- Be concise (1-2 sentences maximum per point)
- Be arranged in order of importance"#;

const SUMMARY_FORMAT: &str = r#"Format your response exactly like this:
SUMMARY: [your very concise paragraph summary here]
POINTS:
- [first point]
- [second point]
- [third point]
(etc.)"#;

const TOPIC_INSTRUCTIONS: &str = r#"Identify the main topic of the following text.
Respond with ONLY ONE WORD naming the topic (for example: Food, Sports, Technology, Politics, Health).
Do not add punctuation, explanations, or any other text."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_prompt_includes_text_and_format() {
        let prompt = PromptBuilder::new(Task::Sentiment, "I won the lottery").build();
        assert!(prompt.contains("Text: \"I won the lottery\""));
        assert!(prompt.contains("Sentiment: [your one-word sentiment]"));
        assert!(prompt.contains("Rationale:"));
    }

    #[test]
    fn test_summary_prompt_short_text() {
        let prompt = PromptBuilder::new(Task::Summary, "A short paragraph.").build();
        assert!(prompt.contains("3-4 key bullet points"));
        assert!(prompt.contains("A short paragraph."));
        assert!(prompt.contains("SUMMARY:"));
        assert!(prompt.contains("POINTS:"));
    }

    #[test]
    fn test_summary_prompt_long_text() {
        let text = "word ".repeat(LONG_TEXT_WORDS);
        let prompt = PromptBuilder::new(Task::Summary, text).build();
        assert!(prompt.contains("5-7 key bullet points"));
        assert!(!prompt.contains("3-4 key bullet points"));
    }

    #[test]
    fn test_topic_prompt() {
        let prompt = PromptBuilder::new(Task::Topic, "The team won the match").build();
        assert!(prompt.contains("ONLY ONE WORD"));
        assert!(prompt.contains("The team won the match"));
        assert!(prompt.ends_with("Topic:"));
    }
}
