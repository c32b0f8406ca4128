//! Career Compass Server
//!
//! A career-discovery service that maps a student's free-text answers
//! about interests, subjects, and hobbies onto a fixed taxonomy of 17
//! career domains, separating suitable from unsuitable domains and
//! suggesting concrete careers.
//!
//! # Features
//!
//! - **Two matching strategies**: keyword substring containment and
//!   TF-IDF cosine similarity, selectable at startup
//! - **Fallback wizard**: follow-up questions when the first pass
//!   matches nothing, with an explicit state machine per session
//! - **Career FAQ**: keyword lookup over a hand-authored Q&A file
//! - **Best-effort translation**: question labels and messages localize
//!   when an endpoint is configured, silently falling back otherwise
//!
//! # Modules
//!
//! - `types`: Core data structures (Domain, Classification, MatchResult)
//! - `catalog`: The domain/keyword/career catalog loaded from JSON
//! - `matcher`: The two matching strategies behind one trait
//! - `session`: Wizard state machine and in-memory session store
//! - `faq`: Career FAQ lookup
//! - `translate`: Best-effort translation capability
//! - `api`: Axum router and REST handlers
//! - `config`: Environment-driven configuration
//!
//! # Example
//!
//! ```no_run
//! use career_compass::catalog::Catalog;
//! use career_compass::config::MatcherStrategy;
//! use career_compass::matcher::{build_matcher, run_classification};
//!
//! fn main() {
//!     let catalog = Catalog::load("data/career_clusters.json").unwrap();
//!     let matcher = build_matcher(MatcherStrategy::Keyword, &catalog);
//!     let result = run_classification(matcher.as_ref(), "I enjoy coding", "");
//!     for domain in &result.suitable {
//!         println!("suitable: {domain}");
//!     }
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod faq;
pub mod matcher;
pub mod session;
pub mod translate;
pub mod types;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use catalog::Catalog;
pub use config::{Config, MatcherStrategy};
pub use faq::FaqBank;
pub use matcher::{build_matcher, run_classification, DomainMatcher};
pub use session::{Session, SessionStore, WizardState};
pub use types::{Classification, Domain, MatchResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
