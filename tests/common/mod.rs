// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use civicvote::application::VoteService;
use civicvote::domain::VotePolicy;
use civicvote::http;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Fresh seeded service under the given policy.
pub fn test_service(policy: VotePolicy) -> VoteService {
    VoteService::new(policy)
}

/// Fresh seeded router under the given policy.
pub fn test_router(policy: VotePolicy) -> Router {
    http::router(Arc::new(test_service(policy)))
}

/// Drive a GET through the router in-process and decode the JSON body.
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(router, request).await
}

/// Drive a POST through the router; `body` of None sends an empty body
/// with no content type, matching a bare fetch() from the UI.
pub async fn post_json(
    router: &Router,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method("POST").uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
