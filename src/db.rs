//! General database handling.

use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime},
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::config::DbConfig;

/// A To-Do item as stored in the document store.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// The identifier assigned by the document store. Only set on items read back from it.
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,

    /// The item's name. Never empty.
    pub item_name: String,

    /// The item's description, if one was submitted.
    pub item_description: Option<String>,

    /// When the item was created.
    pub timestamp: DateTime,
}

impl TodoItem {
    /// Creates a new item timestamped with the current time.
    pub fn new(item_name: String, item_description: Option<String>) -> Self {
        Self {
            id: None,
            item_name,
            item_description,
            timestamp: DateTime::now(),
        }
    }
}

/// An error using the document store.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The store couldn't be reached, or the connection string was invalid.
    #[error("failed to connect to database: {0}")]
    Unavailable(#[source] mongodb::error::Error),

    /// The store was reachable, but inserting the document failed.
    #[error("{0}")]
    Insert(#[source] mongodb::error::Error),
}

/// A handle to the To-Do item collection that connects on first use.
///
/// A failed connection attempt isn't cached, so the next call to [`Database::collection`] tries
/// again from scratch.
#[derive(Debug)]
pub struct Database {
    /// Where to connect.
    config: DbConfig,

    /// The collection handle, set once a connection is verified.
    collection: OnceCell<Collection<TodoItem>>,
}

impl Database {
    /// Creates a handle without connecting.
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            collection: OnceCell::new(),
        }
    }

    /// Returns whether a verified connection is cached.
    pub fn is_connected(&self) -> bool {
        self.collection.initialized()
    }

    /// Gets the To-Do item collection, connecting and verifying the connection with a `ping` if
    /// this is the first successful use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] if the connection string is invalid or the server doesn't
    /// answer the `ping`.
    pub async fn collection(&self) -> Result<&Collection<TodoItem>, Error> {
        self.collection.get_or_try_init(|| self.connect()).await
    }

    /// Connects to the store, logging the outcome.
    async fn connect(&self) -> Result<Collection<TodoItem>, Error> {
        match self.try_connect().await {
            Ok(collection) => {
                info!("MongoDB connected successfully!");
                Ok(collection)
            }
            Err(source) => {
                error!("MongoDB connection failed: {source}");
                Err(Error::Unavailable(source))
            }
        }
    }

    /// Creates a client and pings the server through it.
    async fn try_connect(&self) -> mongodb::error::Result<Collection<TodoItem>> {
        let client = Client::with_uri_str(&self.config.uri).await?;

        // Creating a client doesn't touch the network, so this is the actual connectivity check.
        client.database("admin").run_command(doc! { "ping": 1 }).await?;

        Ok(client
            .database(&self.config.database)
            .collection(&self.config.collection))
    }
}

/// Inserts an item, returning the identifier the store assigned to it as text.
///
/// # Errors
///
/// Returns [`Error::Insert`] if the store rejects the document or the operation fails in transit.
pub async fn insert(collection: &Collection<TodoItem>, item: &TodoItem) -> Result<String, Error> {
    let result = collection.insert_one(item).await.map_err(Error::Insert)?;

    Ok(match result.inserted_id {
        Bson::ObjectId(id) => id.to_hex(),
        id => id.to_string(),
    })
}
