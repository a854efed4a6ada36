//! A fixed informational payload.

use axum::Json;
use axum_macros::debug_handler;
use serde::Serialize;

/// A `GET` response body for this API route.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct GetResponse {
    /// A greeting.
    pub message: &'static str,

    /// The API version.
    pub version: &'static str,

    /// The branch the API started from.
    pub source_branch: &'static str,

    /// The status reported by the feature branch.
    pub status_new_branch: &'static str,

    /// The status reported by the main branch.
    pub status_main_branch: &'static str,
}

/// The only body this route ever returns.
pub const INFO: GetResponse = GetResponse {
    message: "API response from merged branches!",
    version: "1.1",
    source_branch: "initial_commit",
    status_new_branch: "updated",
    status_main_branch: "modified",
};

/// Returns the fixed [`INFO`] payload.
#[debug_handler]
pub async fn get() -> Json<GetResponse> {
    Json(INFO)
}
