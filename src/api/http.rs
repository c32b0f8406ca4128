//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{catalog, classify, faq, sessions};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins so any front-end can talk to us
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // One-shot classification
        .route("/api/classify", post(classify::classify))
        // Wizard sessions
        .route("/api/sessions", post(sessions::create_session))
        .route("/api/sessions/:id", get(sessions::get_session))
        .route("/api/sessions/:id/answers", post(sessions::submit_answers))
        .route("/api/sessions/:id/reset", post(sessions::reset_session))
        // Catalog
        .route("/api/catalog", get(catalog::list_catalog))
        .route("/api/domains/:name", get(catalog::get_domain))
        // FAQ
        .route("/api/faq", get(faq::lookup))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::MatcherStrategy;
    use crate::faq::FaqBank;
    use crate::matcher::build_matcher;
    use crate::translate::NoopTranslator;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let catalog = Arc::new(Catalog::from_entries(Default::default()).unwrap());
        let matcher = build_matcher(MatcherStrategy::Keyword, &catalog);
        let state = Arc::new(AppState::new(
            catalog,
            matcher,
            Arc::new(FaqBank::default()),
            Arc::new(NoopTranslator),
        ));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
