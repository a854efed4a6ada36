//! Helpers for driving the router in unit tests.

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::{
    config::{Config, DbConfig},
    db::tests::UNREACHABLE_URI,
    router, AppState,
};

/// Creates the router and its state, configured with a database that can't be reached.
pub(crate) fn test_app() -> (Router, AppState) {
    let state = AppState::new(&Config {
        address: "127.0.0.1:0".into(),
        db: DbConfig::with_uri(UNREACHABLE_URI),
    });

    (router(state.clone()), state)
}

/// Builds a `GET` request.
pub(crate) fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::get(uri).body(Body::empty())?)
}

/// Builds a URL-encoded form submission.
pub(crate) fn form(body: &'static str) -> anyhow::Result<Request<Body>> {
    Ok(Request::post("/submittodoitem")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))?)
}

/// Sends one request to a fresh app.
pub(crate) async fn send(request: Request<Body>) -> anyhow::Result<(StatusCode, Bytes)> {
    let mut responses = send_all([request]).await?;

    Ok(responses.remove(0))
}

/// Sends requests in order to the same app, collecting each response's status and body.
pub(crate) async fn send_all<const N: usize>(
    requests: [Request<Body>; N],
) -> anyhow::Result<Vec<(StatusCode, Bytes)>> {
    let (router, _) = test_app();
    let mut responses = Vec::with_capacity(N);

    for request in requests {
        let response = router.clone().oneshot(request).await?;
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

        responses.push((status, body));
    }

    Ok(responses)
}

/// Parses a response body as JSON.
pub(crate) fn json(body: &[u8]) -> serde_json::Result<serde_json::Value> {
    serde_json::from_slice(body)
}
