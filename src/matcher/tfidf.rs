//! TF-IDF vector-similarity matching strategy
//!
//! Each domain's keyword list becomes a bag-of-words document. The vector
//! space is fit once at load time; classification vectorizes the input
//! text with the same idf weights and compares it against every domain
//! vector by cosine similarity.
//!
//! Thresholds: strictly above [`SUITABLE_THRESHOLD`] is a suitable
//! candidate, strictly below [`UNSUITABLE_THRESHOLD`] an unsuitable one.
//! The two sets are not complementary; a domain may be in neither.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::types::{Classification, Domain, MAX_SUGGESTIONS};

use super::normalize::expand_text;
use super::DomainMatcher;

pub const SUITABLE_THRESHOLD: f64 = 0.2;
pub const UNSUITABLE_THRESHOLD: f64 = 0.05;

/// Careers surfaced per suitable domain
const CAREERS_PER_DOMAIN: usize = 3;

/// TF-IDF matcher fit over the catalog's domain documents
pub struct TfidfMatcher {
    /// term -> column index
    vocab: HashMap<String, usize>,
    /// smoothed inverse document frequency per column
    idf: Vec<f64>,
    /// L2-normalized document vector per domain with a non-empty document
    domain_vectors: Vec<(Domain, Vec<f64>)>,
    /// career labels per domain, for suggestions
    careers: HashMap<Domain, Vec<String>>,
}

impl TfidfMatcher {
    /// Fit the vector space over the catalog's per-domain keyword documents
    pub fn fit(catalog: &Catalog) -> Self {
        let docs: Vec<(Domain, Vec<String>)> = catalog
            .clusters()
            .iter()
            .map(|c| (c.domain, tokenize(&c.keywords.join(" "))))
            .filter(|(_, tokens)| !tokens.is_empty())
            .collect();

        let mut vocab: HashMap<String, usize> = HashMap::new();
        for (_, tokens) in &docs {
            for token in tokens {
                let next = vocab.len();
                vocab.entry(token.clone()).or_insert(next);
            }
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1
        let n_docs = docs.len() as f64;
        let mut df = vec![0usize; vocab.len()];
        for (_, tokens) in &docs {
            let mut seen = vec![false; vocab.len()];
            for token in tokens {
                let col = vocab[token];
                if !seen[col] {
                    seen[col] = true;
                    df[col] += 1;
                }
            }
        }
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let domain_vectors = docs
            .into_iter()
            .map(|(domain, tokens)| (domain, weigh(&tokens, &vocab, &idf)))
            .collect();

        let careers = catalog
            .clusters()
            .iter()
            .map(|c| (c.domain, c.careers.clone()))
            .collect();

        Self {
            vocab,
            idf,
            domain_vectors,
            careers,
        }
    }

    /// Cosine similarity of the text against every fitted domain,
    /// descending by score. Empty when the text carries no fitted term.
    pub fn similarities(&self, text: &str) -> Vec<(Domain, f64)> {
        let tokens = tokenize(&expand_text(text));
        if tokens.is_empty() {
            return Vec::new();
        }

        let query = weigh(&tokens, &self.vocab, &self.idf);
        if query.iter().all(|&w| w == 0.0) {
            // No overlap with the fitted vocabulary
            return Vec::new();
        }

        let mut scores: Vec<(Domain, f64)> = self
            .domain_vectors
            .iter()
            .map(|(domain, vector)| (*domain, cosine_similarity(&query, vector)))
            .collect();
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        scores
    }
}

impl DomainMatcher for TfidfMatcher {
    /// Suitable candidates: similarity strictly above the threshold,
    /// descending by score
    fn extract_domains(&self, text: &str) -> Vec<Domain> {
        self.similarities(text)
            .into_iter()
            .filter(|(_, score)| *score > SUITABLE_THRESHOLD)
            .map(|(domain, _)| domain)
            .collect()
    }

    /// Strict likes-precedence. Unsuitable collects the dislikes-similar
    /// domains first (descending), then domains nearly orthogonal to the
    /// likes text (ascending), always minus the suitable set.
    fn classify(&self, likes: &str, dislikes: &str) -> Classification {
        let likes_scores = self.similarities(likes);
        let dislikes_scores = self.similarities(dislikes);

        let suitable: Vec<Domain> = likes_scores
            .iter()
            .filter(|(_, score)| *score > SUITABLE_THRESHOLD)
            .map(|(domain, _)| *domain)
            .collect();

        let mut unsuitable: Vec<Domain> = dislikes_scores
            .iter()
            .filter(|(_, score)| *score > SUITABLE_THRESHOLD)
            .map(|(domain, _)| *domain)
            .filter(|d| !suitable.contains(d))
            .collect();

        let mut weak: Vec<(Domain, f64)> = likes_scores
            .iter()
            .filter(|(_, score)| *score < UNSUITABLE_THRESHOLD)
            .copied()
            .collect();
        weak.sort_by(|a, b| a.1.total_cmp(&b.1));
        for (domain, _) in weak {
            if !suitable.contains(&domain) && !unsuitable.contains(&domain) {
                unsuitable.push(domain);
            }
        }

        Classification {
            suitable,
            unsuitable,
        }
    }

    /// Up to three career labels per suitable domain, in score order
    fn suggest_careers(&self, suitable: &[Domain]) -> Vec<String> {
        let mut suggestions = Vec::new();
        for domain in suitable {
            let labels = self.careers.get(domain).map(Vec::as_slice).unwrap_or(&[]);
            for label in labels.iter().take(CAREERS_PER_DOMAIN) {
                if !suggestions.contains(label) {
                    suggestions.push(label.clone());
                }
                if suggestions.len() == MAX_SUGGESTIONS {
                    return suggestions;
                }
            }
        }
        suggestions
    }

    fn scored_domains(&self, text: &str) -> Option<Vec<(Domain, f64)>> {
        Some(self.similarities(text))
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}

/// Lowercase alphanumeric runs of length >= 2
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(str::to_string)
        .collect()
}

/// Term-frequency vector weighted by idf, L2-normalized
fn weigh(tokens: &[String], vocab: &HashMap<String, usize>, idf: &[f64]) -> Vec<f64> {
    let mut vector = vec![0.0; idf.len()];
    for token in tokens {
        if let Some(&col) = vocab.get(token) {
            vector[col] += 1.0;
        }
    }
    for (col, weight) in vector.iter_mut().enumerate() {
        *weight *= idf[col];
    }

    let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in &mut vector {
            *weight /= norm;
        }
    }
    vector
}

/// Cosine of two equal-length vectors; 0.0 when either has no magnitude
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|y| y * y).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ClusterFile;
    use std::collections::HashMap;

    fn test_catalog() -> Catalog {
        let mut entries = HashMap::new();
        entries.insert(
            "Information Technology".to_string(),
            ClusterFile {
                keywords: vec!["kernel".into(), "compiler".into(), "database".into()],
                careers: vec![
                    "Software Developer".into(),
                    "Data Analyst".into(),
                    "Systems Administrator".into(),
                    "QA Engineer".into(),
                ],
            },
        );
        entries.insert(
            "Physical Science".to_string(),
            ClusterFile {
                keywords: vec!["quantum".into(), "particle".into(), "telescope".into()],
                careers: vec!["Physicist".into()],
            },
        );
        entries.insert(
            "Sales".to_string(),
            ClusterFile {
                keywords: vec!["retail".into(), "negotiation".into(), "database".into()],
                careers: vec!["Sales Representative".into()],
            },
        );
        Catalog::from_entries(entries).unwrap()
    }

    #[test]
    fn test_identical_document_scores_one() {
        let matcher = TfidfMatcher::fit(&test_catalog());
        let sims = matcher.similarities("kernel compiler database");
        let (top, score) = sims[0];
        assert_eq!(top, Domain::InformationTechnology);
        assert!((score - 1.0).abs() < 1e-9, "expected cosine 1.0, got {score}");
        assert!(matcher
            .extract_domains("kernel compiler database")
            .contains(&Domain::InformationTechnology));
    }

    #[test]
    fn test_empty_text_yields_empty_sets() {
        let matcher = TfidfMatcher::fit(&test_catalog());
        assert!(matcher.similarities("").is_empty());
        assert!(matcher.extract_domains("   ").is_empty());

        let c = matcher.classify("", "");
        assert!(c.suitable.is_empty());
        assert!(c.unsuitable.is_empty());
    }

    #[test]
    fn test_unrelated_text_yields_no_candidates() {
        let matcher = TfidfMatcher::fit(&test_catalog());
        // No token overlaps the fitted vocabulary
        assert!(matcher.extract_domains("gardening with my grandmother").is_empty());
    }

    #[test]
    fn test_orthogonal_domain_is_unsuitable() {
        let matcher = TfidfMatcher::fit(&test_catalog());
        let c = matcher.classify("quantum particle telescope", "");
        assert_eq!(c.suitable, vec![Domain::PhysicalScience]);
        // IT and Sales share no term with the query, so cosine is 0.0
        assert!(c.unsuitable.contains(&Domain::InformationTechnology));
        assert!(c.unsuitable.contains(&Domain::Sales));
    }

    #[test]
    fn test_candidate_sets_need_not_be_complementary() {
        let matcher = TfidfMatcher::fit(&test_catalog());
        // The query covers the PS and IT documents in full; Sales shares
        // only "database", which lands its score between the thresholds
        let query = "quantum particle telescope kernel compiler database";
        let sales_score = matcher
            .similarities(query)
            .into_iter()
            .find(|(d, _)| *d == Domain::Sales)
            .map(|(_, s)| s)
            .unwrap();
        assert!(sales_score > UNSUITABLE_THRESHOLD && sales_score < SUITABLE_THRESHOLD);

        let c = matcher.classify(query, "");
        assert!(!c.suitable.contains(&Domain::Sales));
        assert!(!c.unsuitable.contains(&Domain::Sales));
    }

    #[test]
    fn test_likes_precedence_on_conflict() {
        let matcher = TfidfMatcher::fit(&test_catalog());
        let c = matcher.classify("quantum particle", "quantum particle");
        assert!(c.suitable.contains(&Domain::PhysicalScience));
        assert!(!c.unsuitable.contains(&Domain::PhysicalScience));
    }

    #[test]
    fn test_suggestions_capped_per_domain() {
        let matcher = TfidfMatcher::fit(&test_catalog());
        let suggestions = matcher.suggest_careers(&[Domain::InformationTechnology]);
        // Three of the four IT careers surface
        assert_eq!(
            suggestions,
            vec![
                "Software Developer".to_string(),
                "Data Analyst".to_string(),
                "Systems Administrator".to_string()
            ]
        );
    }

    #[test]
    fn test_scored_domains_exposed() {
        let matcher = TfidfMatcher::fit(&test_catalog());
        let scores = matcher.scored_domains("kernel compiler database").unwrap();
        assert!(!scores.is_empty());
        // Descending order
        for pair in scores.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
