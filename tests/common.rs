//! Common code for integration tests

use anyhow::Error;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use testcontainers_modules::{
    mongo::Mongo,
    testcontainers::{runners::AsyncRunner, ContainerAsync},
};
use todo_app::{
    config::{Config, DbConfig},
    router, AppState,
};
use tower::ServiceExt;

/// A running MongoDB container. The container stops when this is dropped.
pub struct TestDatabase {
    /// Keeps the container alive.
    _container: ContainerAsync<Mongo>,

    /// Where to reach the database.
    pub config: DbConfig,
}

/// Starts a new MongoDB container
pub async fn create_database() -> Result<TestDatabase, Error> {
    let container = Mongo::default().start().await?;
    let host_port = container.get_host_port_ipv4(27017).await?;
    let uri = format!("mongodb://127.0.0.1:{host_port}/");

    Ok(TestDatabase {
        _container: container,
        config: DbConfig::with_uri(&uri),
    })
}

/// Gets the `item_id` of a successful submission's response body.
pub fn item_id(body: &serde_json::Value) -> Result<&str, Error> {
    body["item_id"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("`item_id` should be a string"))
}

/// Creates the app connected to the specified database.
pub fn create_app(db: &TestDatabase) -> (Router, AppState) {
    let state = AppState::new(&Config {
        address: "127.0.0.1:0".into(),
        db: db.config.clone(),
    });

    (router(state.clone()), state)
}

/// Submits a URL-encoded form to the To-Do item endpoint, returning the status and JSON body.
pub async fn submit(
    router: &Router,
    form: &'static str,
) -> Result<(StatusCode, serde_json::Value), Error> {
    submit_as(router, "application/x-www-form-urlencoded", form).await
}

/// Submits a body with the specified content type to the To-Do item endpoint, returning the
/// status and JSON body.
pub async fn submit_as(
    router: &Router,
    content_type: &str,
    body: &'static str,
) -> Result<(StatusCode, serde_json::Value), Error> {
    let request = Request::post("/submittodoitem")
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))?;

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    Ok((status, serde_json::from_slice(&body)?))
}
