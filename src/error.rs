// Error handling for searchlight

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use crate::domain::DescriptionError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    TemplateRender(String),
    NotFound(String),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::TemplateRender(msg) => write!(f, "Template rendering error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TemplateRender(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// Implement IntoResponse so Axum can convert errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = html_escape(&self.to_string());

        let error_html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error - Searchlight</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            max-width: 600px;
            margin: 100px auto;
            text-align: center;
        }}
        h1 {{ color: #d32f2f; }}
        p {{ color: #666; }}
    </style>
</head>
<body>
    <h1>{}</h1>
    <p>{}</p>
    <p><a href="/help">Available services</a></p>
</body>
</html>"#,
            status.as_str(),
            message
        );

        (status, Html(error_html)).into_response()
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// Helper to convert template errors
impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::TemplateRender(err.to_string())
    }
}

impl From<DescriptionError> for AppError {
    fn from(err: DescriptionError) -> Self {
        match err {
            DescriptionError::NoTemplates => AppError::NotFound(err.to_string()),
            DescriptionError::Validation(_) | DescriptionError::NoCandidate { .. } => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}
