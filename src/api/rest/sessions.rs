//! Wizard session endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, LangParams};
use crate::api::state::AppState;
use crate::session::{self, Session, SessionOutcome, WizardState};
use crate::translate::translate_or_original;
use crate::types::MatchResult;

/// One question, with its label possibly translated
#[derive(Debug, Serialize)]
pub struct QuestionOut {
    pub id: &'static str,
    pub label: String,
}

/// Session snapshot returned by every session endpoint
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub state: WizardState,
    /// Questions to answer next; empty once results are showing
    pub questions: Vec<QuestionOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SessionOutcome>,
}

/// One submitted answer
#[derive(Debug, Deserialize)]
pub struct AnswerIn {
    pub id: String,
    pub text: String,
}

/// Request body for answer submission
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub answers: Vec<AnswerIn>,
    #[serde(default)]
    pub lang: Option<String>,
}

async fn session_response(state: &AppState, session: Session, lang: &str) -> SessionResponse {
    let mut questions = Vec::new();
    for q in session::questions_for(session.state) {
        questions.push(QuestionOut {
            id: q.id,
            label: translate_or_original(state.translator.as_ref(), q.label, lang).await,
        });
    }

    SessionResponse {
        id: session.id,
        state: session.state,
        questions,
        result: session.result,
        outcome: session.outcome,
    }
}

/// POST /api/sessions - Start a new wizard session
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LangParams>,
) -> impl IntoResponse {
    let session = state.sessions.create();
    tracing::info!(session_id = %session.id, "session created");

    let response = session_response(&state, session, params.target()).await;
    (StatusCode::CREATED, Json(response))
}

/// GET /api/sessions/:id - Current session snapshot
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LangParams>,
) -> impl IntoResponse {
    match state.sessions.get(&id) {
        Some(session) => {
            let response = session_response(&state, session, params.target()).await;
            (StatusCode::OK, Json(response)).into_response()
        }
        None => {
            let error = ApiError::not_found(format!("no session with id {id}"));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// POST /api/sessions/:id/answers - Submit answers and advance the wizard
pub async fn submit_answers(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<SubmitRequest>,
) -> impl IntoResponse {
    let answers: Vec<(String, String)> = request
        .answers
        .into_iter()
        .map(|a| (a.id, a.text))
        .collect();

    let submitted = state.sessions.update(&id, |session| {
        session::submit(session, answers, state.matcher.as_ref()).map(|_| session.clone())
    });

    match submitted {
        None => {
            let error = ApiError::not_found(format!("no session with id {id}"));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Some(Err(e)) => {
            let error = ApiError::conflict(e.to_string());
            (StatusCode::CONFLICT, Json(error)).into_response()
        }
        Some(Ok(session)) => {
            tracing::debug!(session_id = %id, state = ?session.state, "answers recorded");
            let lang = request.lang.as_deref().unwrap_or("en");
            let response = session_response(&state, session, lang).await;
            (StatusCode::OK, Json(response)).into_response()
        }
    }
}

/// POST /api/sessions/:id/reset - Reset transition back to the first step
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LangParams>,
) -> impl IntoResponse {
    let session = state.sessions.update(&id, |session| {
        session::reset(session);
        session.clone()
    });

    match session {
        Some(session) => {
            let response = session_response(&state, session, params.target()).await;
            (StatusCode::OK, Json(response)).into_response()
        }
        None => {
            let error = ApiError::not_found(format!("no session with id {id}"));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
