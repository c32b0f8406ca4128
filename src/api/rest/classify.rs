//! One-shot classification endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::matcher::run_classification;
use crate::translate::translate_or_original;
use crate::types::{Domain, MatchResult};

/// Shown when the first pass matched nothing and the caller should run
/// a fallback round
const FALLBACK_ADVICE: &str =
    "No clear career domain detected. Please answer a few more questions or give more specific examples.";

/// Request body for classification
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Free text about careers, subjects and hobbies the student likes
    #[serde(default)]
    pub likes: String,
    /// Free text about what the student dislikes
    #[serde(default)]
    pub dislikes: String,
    /// Target language for the advice message
    #[serde(default)]
    pub lang: Option<String>,
}

/// Per-domain similarity score, surfaced by the tfidf strategy
#[derive(Debug, Serialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub strategy: &'static str,
    #[serde(flatten)]
    pub result: MatchResult,
    /// True when the suitable set is empty and a fallback round applies
    pub fallback_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<DomainScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /api/classify - Classify likes/dislikes text in one shot
///
/// Empty input is valid and yields empty lists with `fallback_needed`.
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClassifyRequest>,
) -> impl IntoResponse {
    let result = run_classification(state.matcher.as_ref(), &request.likes, &request.dislikes);

    let scores = state.matcher.scored_domains(&request.likes).map(|scores| {
        scores
            .into_iter()
            .map(|(domain, score)| DomainScore { domain, score })
            .collect()
    });

    let fallback_needed = result.is_empty();
    let message = if fallback_needed {
        let lang = request.lang.as_deref().unwrap_or("en");
        Some(translate_or_original(state.translator.as_ref(), FALLBACK_ADVICE, lang).await)
    } else {
        None
    };

    let response = ClassifyResponse {
        strategy: state.matcher.name(),
        result,
        fallback_needed,
        scores,
        message,
    };

    (StatusCode::OK, Json(response))
}
