//! The JSON API: the informational endpoint and To-Do item submission.

pub mod form;
pub mod info;
pub mod todo_items;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::db;

/// The `status` field of every API response body.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The request did what it asked for.
    Success,

    /// The request failed. See the accompanying message.
    Error,
}

/// The response body for every [`Error`].
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct ErrorBody {
    /// Always [`Status::Error`].
    pub status: Status,

    /// A human-readable description of the error.
    pub message: String,
}

/// An API error, rendered as a JSON [`ErrorBody`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The submitted form had no `itemName`, or it was empty.
    #[error("Item Name is required")]
    ItemNameRequired,

    /// The document store couldn't be reached.
    #[error("Failed to connect to database")]
    StorageUnavailable(#[source] db::Error),

    /// The document store was reached, but the write failed.
    #[error("An error occurred during submission: {0}")]
    PersistenceFailure(#[source] db::Error),

    /// No route matches the request path.
    #[error("Not Found")]
    RouteNotFound,
}

impl Error {
    /// Gets the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ItemNameRequired => StatusCode::BAD_REQUEST,
            Self::StorageUnavailable(_) | Self::PersistenceFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<db::Error> for Error {
    fn from(error: db::Error) -> Self {
        match error {
            db::Error::Unavailable(_) => Self::StorageUnavailable(error),
            db::Error::Insert(_) => Self::PersistenceFailure(error),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> AxumResponse {
        let status = self.status();

        if status.is_server_error() {
            error!(error = ?self, "{self}");
        }

        let body = ErrorBody {
            status: Status::Error,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// The result of an API handler: a status code and JSON body, or an [`Error`].
pub type Response<T> = Result<(StatusCode, Json<T>), Error>;
