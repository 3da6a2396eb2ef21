//! Resolve search requests against OpenSearch description documents.
//!
//! [`domain::Description`] validates a description document and resolves a
//! set of search parameters plus a content type to the URL to request. The
//! rest of the crate is a small redirect server built on top of it.

pub mod config;
pub mod domain;
pub mod error;
mod handlers;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use config::services::ServicesConfig;
use services::search_service::SearchService;

pub const DEFAULT_ALIAS: &str = "nsidc";

// Application state
pub struct AppState {
    pub search_service: SearchService,
}

/// Load every configured description and build the shared state
pub async fn build_state(
    services_file: Option<&str>,
    default_alias: &str,
) -> anyhow::Result<Arc<AppState>> {
    let config = ServicesConfig::load(services_file)?;
    let search_service = SearchService::from_config(&config, default_alias).await?;
    Ok(Arc::new(AppState { search_service }))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/help", get(handlers::pages::help))
        .route("/search", get(handlers::search::search))
        .route("/search/{alias}", get(handlers::search::search_alias))
        .route("/url/{alias}", get(handlers::search::resolve_url))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
