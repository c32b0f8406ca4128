//! Shared application state

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::faq::FaqBank;
use crate::matcher::DomainMatcher;
use crate::session::SessionStore;
use crate::translate::Translate;

/// State shared across all HTTP handlers
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Arc<dyn DomainMatcher>,
    pub faq: Arc<FaqBank>,
    pub translator: Arc<dyn Translate>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        matcher: Arc<dyn DomainMatcher>,
        faq: Arc<FaqBank>,
        translator: Arc<dyn Translate>,
    ) -> Self {
        Self {
            catalog,
            matcher,
            faq,
            translator,
            sessions: SessionStore::new(),
        }
    }
}
