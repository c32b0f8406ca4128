//! Catalog endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::Domain;

/// One catalog entry in the listing
#[derive(Debug, Serialize)]
pub struct DomainSummary {
    pub domain: Domain,
    pub careers: Vec<String>,
}

/// Full detail for a single domain
#[derive(Debug, Serialize)]
pub struct DomainDetail {
    pub domain: Domain,
    pub keywords: Vec<String>,
    pub careers: Vec<String>,
}

/// GET /api/catalog - All domains in catalog order with their careers
pub async fn list_catalog(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let domains: Vec<DomainSummary> = state
        .catalog
        .clusters()
        .iter()
        .map(|c| DomainSummary {
            domain: c.domain,
            careers: c.careers.clone(),
        })
        .collect();

    let total = domains.len();
    Json(ApiResponse::with_total(domains, total))
}

/// GET /api/domains/:name - One domain with keywords and careers
///
/// Domain names contain spaces and ampersands, so the path segment
/// arrives URL-encoded.
pub async fn get_domain(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let decoded = urlencoding::decode(&name)
        .map(|s| s.into_owned())
        .unwrap_or(name);

    match Domain::from_name(&decoded) {
        Some(domain) => {
            let cluster = state.catalog.cluster(domain);
            let detail = DomainDetail {
                domain,
                keywords: cluster.keywords.clone(),
                careers: cluster.careers.clone(),
            };
            (StatusCode::OK, Json(ApiResponse::new(detail))).into_response()
        }
        None => {
            let error = ApiError::not_found(format!("no career domain named {decoded}"));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
