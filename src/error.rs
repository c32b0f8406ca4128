//! Error types
//!
//! Data-file errors are fatal at startup; translation errors are always
//! recovered by falling back to the untranslated text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("unknown career domain in catalog: {0}")]
    UnknownDomain(String),

    #[error("empty keyword under domain {0}")]
    EmptyKeyword(String),
}

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("failed to read FAQ file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse FAQ file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation service returned status {0}")]
    Status(u16),

    #[error("translation response missing translatedText field")]
    MalformedResponse,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WizardError {
    #[error("session is already showing results; reset it to start over")]
    AlreadyComplete,
}
