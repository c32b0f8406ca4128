//! Domain matching - free text in, career domains out
//!
//! Two interchangeable strategies sit behind the [`DomainMatcher`] trait:
//!
//! - `keyword`: substring containment against the catalog keyword table
//! - `tfidf`: cosine similarity in a TF-IDF space fit over the catalog
//!
//! Both normalize input first (spell correction + term expansion) and
//! apply strict likes-precedence: a domain both liked and disliked is
//! reported suitable, never unsuitable.

mod keyword;
pub mod normalize;
mod tfidf;

pub use keyword::KeywordMatcher;
pub use tfidf::{TfidfMatcher, SUITABLE_THRESHOLD, UNSUITABLE_THRESHOLD};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::MatcherStrategy;
use crate::types::{Classification, Domain, MatchResult};

/// A matching strategy over the fixed career catalog
pub trait DomainMatcher: Send + Sync {
    /// Domains the text matches. Empty text yields the empty set.
    /// Deterministic and side-effect free.
    fn extract_domains(&self, text: &str) -> Vec<Domain>;

    /// Split domains into suitable and unsuitable for one student's
    /// likes/dislikes. The lists are disjoint; suitable wins conflicts.
    fn classify(&self, likes: &str, dislikes: &str) -> Classification;

    /// Career labels derived from the suitable set, at most ten
    fn suggest_careers(&self, suitable: &[Domain]) -> Vec<String>;

    /// Per-domain similarity scores, for strategies that compute them
    fn scored_domains(&self, _text: &str) -> Option<Vec<(Domain, f64)>> {
        None
    }

    /// Strategy name, for logging and the API
    fn name(&self) -> &'static str;
}

/// Build the configured strategy over a loaded catalog
pub fn build_matcher(strategy: MatcherStrategy, catalog: &Catalog) -> Arc<dyn DomainMatcher> {
    match strategy {
        MatcherStrategy::Keyword => Arc::new(KeywordMatcher::new(catalog)),
        MatcherStrategy::Tfidf => Arc::new(TfidfMatcher::fit(catalog)),
    }
}

/// Classify and derive suggestions in one step
pub fn run_classification(
    matcher: &dyn DomainMatcher,
    likes: &str,
    dislikes: &str,
) -> MatchResult {
    let Classification {
        suitable,
        unsuitable,
    } = matcher.classify(likes, dislikes);
    let suggestions = matcher.suggest_careers(&suitable);

    MatchResult {
        suitable,
        unsuitable,
        suggestions,
    }
}
