// Search handlers - turn requests into redirects to the resolved search URL

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

use crate::{
    error::AppError,
    services::search_service::{Resolved, SearchService},
    AppState,
};

/// GET /search?q=<alias> <terms>
pub async fn search(
    Query(query): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let q = query
        .get("q")
        .cloned()
        .ok_or_else(|| AppError::BadRequest("Missing 'q' parameter".to_string()))?;

    let (content_type, params) = SearchService::search_params_from_query(query, &["q"]);
    let resolved = state
        .search_service
        .resolve_query(&q, content_type.as_deref(), params)?;

    debug!(alias = %resolved.alias, url = %resolved.url, "redirecting");
    Ok(Redirect::to(&resolved.url))
}

/// GET /search/{alias}
pub async fn search_alias(
    Path(alias): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let resolved = resolve_alias(&state, &alias, query)?;

    debug!(alias = %resolved.alias, url = %resolved.url, "redirecting");
    Ok(Redirect::to(&resolved.url))
}

#[derive(Serialize)]
pub struct ResolvedUrl {
    pub alias: String,
    pub content_type: String,
    pub url: String,
}

impl From<Resolved> for ResolvedUrl {
    fn from(value: Resolved) -> Self {
        Self {
            alias: value.alias,
            content_type: value.content_type,
            url: value.url,
        }
    }
}

/// GET /url/{alias} - the URL without redirecting
pub async fn resolve_url(
    Path(alias): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResolvedUrl>, AppError> {
    let resolved = resolve_alias(&state, &alias, query)?;
    Ok(Json(resolved.into()))
}

fn resolve_alias(
    state: &AppState,
    alias: &str,
    query: HashMap<String, String>,
) -> Result<Resolved, AppError> {
    let (content_type, params) = SearchService::search_params_from_query(query, &[]);
    state
        .search_service
        .resolve(alias, content_type.as_deref(), &params)
}
