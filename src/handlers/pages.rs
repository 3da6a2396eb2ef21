// Index and help pages

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::{error::AppError, AppState};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    default_alias: &'a str,
}

#[derive(Template)]
#[template(path = "help.html")]
struct HelpTemplate {
    services: Vec<ServiceSummary>,
}

struct ServiceSummary {
    alias: String,
    description: String,
    default_content_type: String,
    templates: Vec<TemplateLine>,
}

struct TemplateLine {
    content_type: String,
    template: String,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate {
        default_alias: state.search_service.default_alias(),
    };
    Ok(Html(template.render()?))
}

pub async fn help(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let services = state
        .search_service
        .services()
        .into_iter()
        .map(|service| ServiceSummary {
            alias: service.alias.clone(),
            description: service.description.clone(),
            default_content_type: service
                .default_content_type
                .clone()
                .unwrap_or_else(|| "*/*".to_string()),
            templates: service
                .osdd
                .templates()
                .unwrap_or_default()
                .iter()
                .map(|t| TemplateLine {
                    content_type: t.content_type.clone().unwrap_or_else(|| "-".to_string()),
                    template: t.template.clone(),
                })
                .collect(),
        })
        .collect();

    let template = HelpTemplate { services };
    Ok(Html(template.render()?))
}
