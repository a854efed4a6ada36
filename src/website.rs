//! The website: a single page with the To-Do item form.

use askama::Template;
use axum::{http::StatusCode, response::Html};
use axum_macros::debug_handler;
use tracing::error;

/// The home page template.
#[derive(Template, Debug)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    /// Where the form is submitted.
    submit_path: &'a str,
}

/// Renders the home page.
///
/// # Errors
///
/// Responds with status 500 if the template fails to render.
#[debug_handler]
pub async fn index() -> Result<Html<String>, StatusCode> {
    IndexPage {
        submit_path: "/submittodoitem",
    }
    .render()
    .map(Html)
    .map_err(|error| {
        error!("failed to render home page: {error}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
