//! Keyword-containment matching strategy
//!
//! A domain is hit when any of its trigger keywords appears as a substring
//! of the lowercased input text. This is deliberately substring matching,
//! not word-boundary matching, so "math" hits "mathematics" and short
//! triggers can hit inside unrelated words.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::types::{Classification, Domain, MAX_SUGGESTIONS};

use super::normalize::expand_text;
use super::DomainMatcher;

/// Substring keyword matcher over the catalog's merged keyword table
pub struct KeywordMatcher {
    /// keyword -> domains, in declaration order
    table: Vec<(String, Vec<Domain>)>,
}

impl KeywordMatcher {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            table: catalog.keyword_table().to_vec(),
        }
    }
}

impl DomainMatcher for KeywordMatcher {
    /// Domains whose keywords appear in the text, in catalog order
    fn extract_domains(&self, text: &str) -> Vec<Domain> {
        let text = expand_text(text);
        if text.is_empty() {
            return Vec::new();
        }

        let mut hits: HashSet<Domain> = HashSet::new();
        for (keyword, domains) in &self.table {
            if text.contains(keyword.as_str()) {
                hits.extend(domains.iter().copied());
            }
        }

        Domain::ALL
            .iter()
            .copied()
            .filter(|d| hits.contains(d))
            .collect()
    }

    /// Strict likes-precedence: a domain both liked and disliked stays suitable
    fn classify(&self, likes: &str, dislikes: &str) -> Classification {
        let suitable = self.extract_domains(likes);
        let unsuitable = self
            .extract_domains(dislikes)
            .into_iter()
            .filter(|d| !suitable.contains(d))
            .collect();

        Classification {
            suitable,
            unsuitable,
        }
    }

    /// Title-cased keywords whose domains intersect the suitable set,
    /// in declaration order, truncated to ten
    fn suggest_careers(&self, suitable: &[Domain]) -> Vec<String> {
        let mut suggestions = Vec::new();
        for (keyword, domains) in &self.table {
            if domains.iter().any(|d| suitable.contains(d)) {
                let label = title_case(keyword);
                if !suggestions.contains(&label) {
                    suggestions.push(label);
                }
            }
            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }
        }
        suggestions
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

/// Uppercase the first letter of every word: "software developer" -> "Software Developer"
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
