// Common test utilities shared across test files

use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use searchlight::{
    domain::{Description, OPENSEARCH_NAMESPACE},
    services::search_service::{RegisteredService, SearchService},
    AppState,
};
use std::sync::Arc;
use tower::ServiceExt;

pub const NSIDC_OSDD: &str = include_str!("../../descriptions/nsidc.xml");
pub const WIKIPEDIA_OSDD: &str = include_str!("../../descriptions/wikipedia.xml");

/// Search service with the bundled descriptions plus one that has no templates
#[allow(dead_code)]
pub fn test_search_service() -> SearchService {
    let mut service = SearchService::new("w");
    service
        .register(
            RegisteredService::new("nsidc", "NSIDC data catalog", Description::new(NSIDC_OSDD).unwrap())
                .with_default_content_type("text/html"),
        )
        .unwrap();
    service
        .register(
            RegisteredService::new("w", "Wikipedia (en)", Description::new(WIKIPEDIA_OSDD).unwrap())
                .with_default_content_type("text/html"),
        )
        .unwrap();
    service
        .register(RegisteredService::new(
            "empty",
            "Describes itself only",
            Description::new(format!(
                r#"<OpenSearchDescription xmlns="{}"><Url rel="self" template="https://example.com/osdd"/></OpenSearchDescription>"#,
                OPENSEARCH_NAMESPACE
            ))
            .unwrap(),
        ))
        .unwrap();
    service
}

/// Create a test Axum router for integration tests
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState {
        search_service: test_search_service(),
    });
    searchlight::create_router(state)
}

#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[allow(dead_code)]
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get("location")
        .expect("redirect without location header")
        .to_str()
        .unwrap()
        .to_string()
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
