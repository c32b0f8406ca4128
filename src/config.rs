//! Runtime configuration from environment variables

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which matching strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherStrategy {
    #[default]
    Keyword,
    Tfidf,
}

impl FromStr for MatcherStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(MatcherStrategy::Keyword),
            "tfidf" => Ok(MatcherStrategy::Tfidf),
            other => Err(format!("unknown matcher strategy: {other}")),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Directory holding career_clusters.json and career_faq.json
    pub data_dir: PathBuf,
    /// Matching strategy
    pub strategy: MatcherStrategy,
    /// Translation endpoint; translation is disabled when unset
    pub translate_url: Option<String>,
    /// Optional API key for the translation endpoint
    pub translate_api_key: Option<String>,
}

impl Config {
    /// Read configuration from the environment, with defaults for
    /// everything. An unrecognized CAREER_MATCHER value falls back to
    /// the keyword strategy with a warning.
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("CAREER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let data_dir = env::var("CAREER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let strategy = match env::var("CAREER_MATCHER") {
            Ok(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!("{e}, falling back to keyword");
                MatcherStrategy::Keyword
            }),
            Err(_) => MatcherStrategy::Keyword,
        };

        let translate_url = env::var("CAREER_TRANSLATE_URL").ok().filter(|s| !s.is_empty());
        let translate_api_key = env::var("CAREER_TRANSLATE_API_KEY").ok();

        Self {
            bind_addr,
            data_dir,
            strategy,
            translate_url,
            translate_api_key,
        }
    }

    /// Path to the catalog data file
    pub fn clusters_path(&self) -> PathBuf {
        self.data_dir.join("career_clusters.json")
    }

    /// Path to the FAQ data file
    pub fn faq_path(&self) -> PathBuf {
        self.data_dir.join("career_faq.json")
    }

    /// Configuration for tests: data files from a given directory,
    /// keyword strategy, no translation
    pub fn for_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            data_dir: data_dir.as_ref().to_path_buf(),
            strategy: MatcherStrategy::Keyword,
            translate_url: None,
            translate_api_key: None,
        }
    }
}
