//! REST API module for HTTP endpoints
//!
//! Provides the endpoints the questionnaire front-end talks to:
//! - `POST /api/classify` - One-shot classification
//! - `POST /api/sessions` - Start a wizard session
//! - `GET  /api/sessions/:id` - Session snapshot
//! - `POST /api/sessions/:id/answers` - Submit answers, advance the wizard
//! - `POST /api/sessions/:id/reset` - Back to the first step
//! - `GET  /api/catalog` - The full domain catalog
//! - `GET  /api/domains/:name` - One domain with keywords and careers
//! - `GET  /api/faq` - Career FAQ lookup

pub mod catalog;
pub mod classify;
pub mod faq;
pub mod sessions;

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "CONFLICT".to_string(),
        }
    }
}

/// Optional target-language query parameter, shared by several endpoints
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    #[serde(default)]
    pub lang: Option<String>,
}

impl LangParams {
    /// Target language, defaulting to the source language
    pub fn target(&self) -> &str {
        self.lang.as_deref().unwrap_or(crate::translate::SOURCE_LANG)
    }
}
