//! Configuration loaded from the environment (and a `.env` file, if present).

use tracing::debug;

/// The address the server listens on when `ADDRESS` isn't set.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5000";

/// The MongoDB connection string used when `MONGO_URI` isn't set.
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/";

/// The database name used when `DB_NAME` isn't set.
pub const DEFAULT_DB_NAME: &str = "todo_app_db";

/// The collection name used when `COLLECTION_NAME` isn't set.
pub const DEFAULT_COLLECTION_NAME: &str = "todo_items";

/// The server's configuration.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// The socket address to listen on.
    pub address: String,

    /// How to reach the document store.
    pub db: DbConfig,
}

/// Where To-Do items are stored.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DbConfig {
    /// The MongoDB connection string.
    pub uri: String,

    /// The name of the database holding the collection.
    pub database: String,

    /// The name of the collection To-Do items are inserted into.
    pub collection: String,
}

impl Config {
    /// Reads the configuration from environment variables, falling back to defaults for unset
    /// ones.
    pub fn from_env() -> Self {
        Self {
            address: var_or("ADDRESS", DEFAULT_ADDRESS),
            db: DbConfig {
                uri: var_or("MONGO_URI", DEFAULT_MONGO_URI),
                database: var_or("DB_NAME", DEFAULT_DB_NAME),
                collection: var_or("COLLECTION_NAME", DEFAULT_COLLECTION_NAME),
            },
        }
    }
}

impl DbConfig {
    /// Creates a [`DbConfig`] for the default database and collection at the specified URI.
    pub fn with_uri(uri: &str) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DB_NAME.into(),
            collection: DEFAULT_COLLECTION_NAME.into(),
        }
    }
}

/// Gets an environment variable, or the specified default if it's unset or not valid Unicode.
fn var_or(key: &str, default: &str) -> String {
    dotenvy::var(key).unwrap_or_else(|_| {
        debug!("{key} not set, using default: {default}");
        default.into()
    })
}
