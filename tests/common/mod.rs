// Shared helpers for the HTTP integration tests.
//
// Routers are driven in-process with tower::ServiceExt::oneshot(); provider
// traffic goes to a mockito server when a test needs an upstream.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // provides .oneshot()

use gyaansetu::config::{AppConfig, Credentials, ProviderSettings};
use gyaansetu::server::{create_router, AppState};

pub const BOUNDARY: &str = "gyaansetu-test-boundary";

/// Router with the given credentials and, optionally, every provider
/// pointed at `base_url`.
pub fn app_with(credentials: &[(&str, &str)], base_url: Option<&str>) -> Router {
    let mut providers = ProviderSettings::default();
    if let Some(url) = base_url {
        providers = providers.with_base_url(url);
    }
    let config = AppConfig::new(Credentials::from_pairs(credentials.iter().copied()))
        .with_providers(providers);
    let state = AppState::new(config).expect("failed to build app state");
    create_router(Arc::new(state))
}

/// Router with no credentials at all (demo mode).
pub fn demo_app() -> Router {
    app_with(&[], None)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    app.oneshot(req).await.expect("oneshot failed")
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    app.oneshot(req).await.expect("oneshot failed")
}

/// One part of a hand-built multipart body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .expect("failed to build request");
    app.oneshot(req).await.expect("oneshot failed")
}

/// Read an Axum response body as a parsed serde_json::Value.
pub async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("response body is not valid JSON")
}

/// Assert the status and return the JSON body.
pub async fn expect_json(resp: Response, status: StatusCode) -> Value {
    assert_eq!(resp.status(), status);
    body_json(resp).await
}
