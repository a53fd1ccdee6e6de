//! In-process extractive summarizer
//!
//! Scores sentences by term frequency and position and returns the best ones
//! in their original order. Bounds are interpreted as word counts.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tracing::debug;

use super::Summarizer;
use crate::core::models::SummaryBounds;
use crate::errors::SummarizeError;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "this",
        "that", "these", "those", "it", "its", "as", "if", "then", "than", "so", "such", "no",
        "not", "only", "own", "same", "too", "very", "just", "also", "now", "here", "there",
        "when", "where", "why", "how", "all", "each", "every", "both", "few", "more", "most",
        "other", "some", "any", "into", "through", "during", "before", "after", "above", "below",
        "up", "down", "out", "off", "over", "under", "again", "further", "once", "he", "she",
        "they", "we", "you", "i", "me", "my", "your", "his", "her", "their", "our", "which", "who",
        "whom", "what", "whose",
    ]
    .into_iter()
    .collect()
});

const TFIDF_WEIGHT: f32 = 0.6;
const POSITION_WEIGHT: f32 = 0.4;

#[derive(Debug, Clone)]
struct ScoredSentence {
    text: String,
    position: usize,
    word_count: usize,
    score: f32,
}

/// Split text into sentences on `.`, `!` and `?`. Trailing text without
/// terminal punctuation forms its own sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|w| w.len() >= 2 && !STOPWORDS.contains(w))
        .map(String::from)
        .collect()
}

fn term_counts(sentences: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for sentence in sentences {
        for word in tokenize(sentence) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    counts
}

fn score_sentences(sentences: &[String]) -> Vec<ScoredSentence> {
    let counts = term_counts(sentences);
    let total = sentences.len().max(1) as f32;

    sentences
        .iter()
        .enumerate()
        .map(|(position, text)| {
            let words = tokenize(text);
            let tf: f32 = words
                .iter()
                .map(|w| {
                    let count = counts.get(w).copied().unwrap_or(0);
                    if count == 0 { 0.0 } else { 1.0 + (count as f32).ln() }
                })
                .sum::<f32>()
                / (words.len() as f32).max(1.0);
            let position_score = 1.0 - (position as f32 / total);

            ScoredSentence {
                text: text.clone(),
                position,
                word_count: text.split_whitespace().count(),
                score: tf * TFIDF_WEIGHT + position_score * POSITION_WEIGHT,
            }
        })
        .collect()
}

fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extractive summarizer that runs entirely in-process.
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer;

impl ExtractiveSummarizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Selects sentences until at least `min_length` words are covered,
    /// never exceeding `max_length` words in total.
    #[must_use]
    pub fn summarize_text(&self, text: &str, bounds: SummaryBounds) -> String {
        let min_words = bounds.min_length as usize;
        let max_words = bounds.max_length.max(1) as usize;

        let mut ranked = score_sentences(&split_sentences(text));
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.position.cmp(&b.position))
        });

        let mut selected: Vec<ScoredSentence> = Vec::new();
        let mut covered = 0usize;

        for sentence in ranked {
            if covered >= min_words {
                break;
            }
            let room = max_words - covered;
            if room == 0 {
                break;
            }
            if sentence.word_count <= room {
                covered += sentence.word_count;
                selected.push(sentence);
            } else {
                let truncated = truncate_words(&sentence.text, room);
                covered += room;
                selected.push(ScoredSentence {
                    text: truncated,
                    word_count: room,
                    ..sentence
                });
            }
        }

        debug!(
            sentences = selected.len(),
            words = covered,
            "Extractive summary assembled"
        );

        selected.sort_by_key(|s| s.position);
        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, SummarizeError> {
        let summary = self.summarize_text(text, bounds);
        if summary.is_empty() {
            return Err(SummarizeError::MalformedResponse(
                "extractive summary is empty".to_string(),
            ));
        }
        Ok(summary)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "Rust is a systems programming language focused on safety. \
        The Rust compiler checks memory safety at compile time. \
        Many teams adopt Rust for network services and command line tools. \
        Cargo is the package manager that ships with Rust. \
        Some people enjoy gardening on weekends.";

    fn bounds(min_length: u32, max_length: u32) -> SummaryBounds {
        SummaryBounds {
            min_length,
            max_length,
        }
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("One two three. Four five six! Trailing words here");
        assert_eq!(
            sentences,
            vec!["One two three.", "Four five six!", "Trailing words here"]
        );
    }

    #[test]
    fn test_tokenize_drops_stopwords_and_punctuation() {
        assert_eq!(tokenize("The Rust, compiler!"), vec!["rust", "compiler"]);
    }

    #[test]
    fn test_summary_respects_max_length() {
        let summary = ExtractiveSummarizer::new().summarize_text(ARTICLE, bounds(20, 25));
        let words = summary.split_whitespace().count();
        assert!(words <= 25, "summary has {words} words: {summary}");
        assert!(words >= 20, "summary has {words} words: {summary}");
    }

    #[test]
    fn test_summary_keeps_original_order() {
        // ARTICLE has 44 words, so a 44 word minimum pulls in every sentence
        let summary = ExtractiveSummarizer::new().summarize_text(ARTICLE, bounds(44, 60));
        let first = summary.find("Rust is a systems").expect("first sentence selected");
        let fourth = summary.find("Cargo is the package").expect("fourth sentence selected");
        let last = summary.find("Some people enjoy").expect("last sentence selected");
        assert!(first < fourth && fourth < last, "{summary}");
        assert_eq!(summary, ARTICLE);
    }

    #[test]
    fn test_short_text_is_returned_whole() {
        let text = "only a handful of words here without any ending";
        let summary = ExtractiveSummarizer::new().summarize_text(text, bounds(40, 150));
        assert_eq!(summary, text);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let s = ExtractiveSummarizer::new();
        assert_eq!(
            s.summarize_text(ARTICLE, bounds(20, 60)),
            s.summarize_text(ARTICLE, bounds(20, 60))
        );
    }

    #[tokio::test]
    async fn test_trait_rejects_empty_output() {
        let err = ExtractiveSummarizer::new()
            .summarize("   ", bounds(20, 60))
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizeError::MalformedResponse(_)));
    }
}
