//! The set of submitted To-Do items.

use axum::{extract::State, http::StatusCode, Json};
use axum_macros::debug_handler;
use serde::Serialize;
use tracing::info;

use crate::{
    api::{self, form::FormFields, Response, Status},
    db::{self, TodoItem},
    AppState,
};

/// The message returned with every successfully created item.
pub const CREATED_MESSAGE: &str = "To-Do item added successfully!";

/// A `POST` request form for this API route, URL-encoded or `multipart/form-data`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PostRequest {
    /// The item's name. Required, but checked by the handler so a missing one gets the same error
    /// as an empty one.
    pub item_name: Option<String>,

    /// The item's description.
    pub item_description: Option<String>,
}

impl From<FormFields> for PostRequest {
    fn from(mut fields: FormFields) -> Self {
        Self {
            item_name: fields.take("itemName"),
            item_description: fields.take("itemDescription"),
        }
    }
}

/// Stores a new To-Do item, returning the ID the database assigned to it.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn post(
    State(state): State<AppState>,
    fields: FormFields,
) -> Response<PostResponse> {
    let body = PostRequest::from(fields);

    let Some(item_name) = body.item_name.filter(|name| !name.is_empty()) else {
        return Err(api::Error::ItemNameRequired);
    };

    let collection = state.db.collection().await?;

    let item = TodoItem::new(item_name, body.item_description);
    let item_id = db::insert(collection, &item).await?;

    info!(%item_id, "To-Do item added");

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            status: Status::Success,
            message: CREATED_MESSAGE,
            item_id,
        }),
    ))
}

/// A `POST` response body for this API route.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct PostResponse {
    /// Always [`Status::Success`].
    pub status: Status,

    /// Always [`CREATED_MESSAGE`].
    pub message: &'static str,

    /// The ID the database assigned to the new item.
    pub item_id: String,
}
