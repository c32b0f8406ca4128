//! HTTP API - router, handlers and shared state

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
