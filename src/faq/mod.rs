//! Career FAQ lookup
//!
//! Answers a free-text career question from a hand-authored FAQ file.
//! Matching is deliberately loose: the first stored entry sharing a
//! content word with the user's question wins. No answer is a normal
//! outcome, not an error.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::FaqError;

/// Question words too generic to match on
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "do", "does", "did", "what", "which", "who",
    "how", "why", "when", "where", "can", "could", "should", "would", "will", "to", "of", "in",
    "on", "for", "and", "or", "about", "me", "my", "you", "your", "it", "i",
];

/// On-disk shape: category -> list of question/answer pairs
#[derive(Debug, Clone, Deserialize)]
struct FaqPairFile {
    q: String,
    a: String,
}

/// One stored FAQ entry
#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub category: String,
    pub question: String,
    pub answer: String,
    /// Lowercased content words of the question, precomputed at load
    keywords: Vec<String>,
}

/// The loaded FAQ bank
#[derive(Debug, Clone, Default)]
pub struct FaqBank {
    entries: Vec<FaqEntry>,
}

impl FaqBank {
    /// Load the FAQ from a JSON file shaped as
    /// `{ "<category>": [ { "q": "...", "a": "..." } ] }`
    pub fn load(path: impl AsRef<Path>) -> Result<FaqBank, FaqError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FaqError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let raw: HashMap<String, Vec<FaqPairFile>> =
            serde_json::from_str(&content).map_err(|source| FaqError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        // Sort categories so entry order is stable across loads
        let mut categories: Vec<(String, Vec<FaqPairFile>)> = raw.into_iter().collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));

        let entries = categories
            .into_iter()
            .flat_map(|(category, pairs)| {
                pairs.into_iter().map(move |pair| FaqEntry {
                    keywords: content_words(&pair.q),
                    category: category.clone(),
                    question: pair.q,
                    answer: pair.a,
                })
            })
            .collect();

        Ok(FaqBank { entries })
    }

    /// Stored entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer a free-text question: first entry whose content words
    /// overlap the question text wins
    pub fn answer(&self, question: &str) -> Option<&FaqEntry> {
        let question = question.to_lowercase();
        if question.trim().is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| question.contains(k.as_str())))
    }
}

/// Lowercased words of the text with stopwords and one-letter words removed
fn content_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 1 && !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}
