//! A minimal To-Do list web service. It serves a form page, a fixed informational JSON endpoint,
//! and a form submission endpoint that stores To-Do items in MongoDB.

pub mod api;
pub mod config;
pub mod db;
pub mod logging;
#[cfg(test)]
mod test_utils;
pub mod website;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{config::Config, db::Database};

/// State shared by every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The lazily connected document store.
    pub db: Arc<Database>,
}

impl AppState {
    /// Creates the state from configuration without connecting to the database yet.
    pub fn new(config: &Config) -> Self {
        Self {
            db: Arc::new(Database::new(config.db.clone())),
        }
    }
}

/// Builds the application's router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(website::index))
        .route("/api", get(api::info::get))
        .route("/submittodoitem", post(api::todo_items::post))
        .fallback(|| async { api::Error::RouteNotFound })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
