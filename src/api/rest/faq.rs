//! FAQ endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::api::state::AppState;
use crate::translate::translate_or_original;

const NO_ANSWER: &str = "Sorry, I don't have an answer for that yet. Please ask another question.";

/// Query parameters for FAQ lookup
#[derive(Debug, Deserialize)]
pub struct FaqParams {
    /// The free-text career question
    pub q: String,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FaqResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Set when no stored answer matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /api/faq - Answer a free-text career question
///
/// No stored answer is a normal 200 outcome carrying an explanatory
/// message, not an error.
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FaqParams>,
) -> impl IntoResponse {
    if params.q.trim().is_empty() {
        let error = ApiError::bad_request("Query parameter 'q' is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let lang = params.lang.as_deref().unwrap_or("en");
    let response = match state.faq.answer(&params.q) {
        Some(entry) => FaqResponse {
            category: Some(entry.category.clone()),
            answer: Some(
                translate_or_original(state.translator.as_ref(), &entry.answer, lang).await,
            ),
            message: None,
        },
        None => FaqResponse {
            category: None,
            answer: None,
            message: Some(translate_or_original(state.translator.as_ref(), NO_ANSWER, lang).await),
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}
