//! Career Compass Server - Binary Entry Point
//!
//! Loads the catalog and FAQ data (fatal when missing), builds the
//! configured matching strategy, and serves the HTTP API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use career_compass::api::{create_router, AppState};
use career_compass::catalog::Catalog;
use career_compass::config::Config;
use career_compass::faq::FaqBank;
use career_compass::matcher::build_matcher;
use career_compass::translate::{HttpTranslator, NoopTranslator, Translate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "career_compass=info,career_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // Both data files are required; a missing file stops startup
    let catalog = Arc::new(Catalog::load(config.clusters_path())?);
    let faq = Arc::new(FaqBank::load(config.faq_path())?);

    let matcher = build_matcher(config.strategy, &catalog);
    tracing::info!(
        strategy = matcher.name(),
        domains = catalog.clusters().len(),
        keywords = catalog.keyword_table().len(),
        faq_entries = faq.len(),
        "catalog loaded"
    );

    let translator: Arc<dyn Translate> = match &config.translate_url {
        Some(url) => {
            tracing::info!(endpoint = %url, "translation enabled");
            Arc::new(HttpTranslator::new(
                url.clone(),
                config.translate_api_key.clone(),
            ))
        }
        None => Arc::new(NoopTranslator),
    };

    let state = Arc::new(AppState::new(catalog, matcher, faq, translator));
    let app = create_router(state);

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
