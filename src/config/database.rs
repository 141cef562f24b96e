use bson::{doc, Document};
use mongodb::{options::ClientOptions, Client, Collection, Database};
use std::env;
use tracing::{debug, info};
use validator::Validate;

use crate::error::ConfigError;

pub const MONGO_URI_VAR: &str = "MONGO_URI";
pub const DB_NAME_VAR: &str = "DB_NAME";

const APP_NAME: &str = "logbase";
const LOGS_COLLECTION: &str = "logs";
const USERS_COLLECTION: &str = "users";

#[derive(Debug, Clone, Validate)]
pub struct DatabaseConfig {
    #[validate(length(min = 1, message = "MONGO_URI must be set"))]
    pub mongo_uri: String,
    #[validate(length(min = 1, message = "DB_NAME must be set"))]
    pub db_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build and validate the config from any key lookup. Unset and empty
    /// values are both rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            mongo_uri: lookup(MONGO_URI_VAR).unwrap_or_default(),
            db_name: lookup(DB_NAME_VAR).unwrap_or_default(),
        };

        debug!(
            db_name = %config.db_name,
            mongo_uri_loaded = !config.mongo_uri.is_empty(),
            "Database configuration read"
        );

        config.validate()?;
        Ok(config)
    }
}

/// Client, database and collection handles shared by the whole process.
///
/// Cloning is cheap; every clone points at the same driver client.
#[derive(Clone, Debug)]
pub struct Store {
    client: Client,
    db: Database,
    logs: Collection<Document>,
    users: Collection<Document>,
}

impl Store {
    pub fn new(client: Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self {
            logs: db.collection(LOGS_COLLECTION),
            users: db.collection(USERS_COLLECTION),
            client,
            db,
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn db_name(&self) -> &str {
        self.db.name()
    }

    pub fn logs(&self) -> &Collection<Document> {
        &self.logs
    }

    pub fn users(&self) -> &Collection<Document> {
        &self.users
    }

    pub fn collection_names(&self) -> [&str; 2] {
        [self.logs.name(), self.users.name()]
    }

    /// Round-trip to the server. This is the first point where an
    /// unreachable or misconfigured server shows up.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub async fn shutdown(self) {
        info!(db_name = %self.db.name(), "Closing MongoDB client");
        self.client.shutdown().await;
    }
}

/// Build the client without contacting the server. Connection errors surface
/// on the first operation against a collection.
pub async fn connect(config: &DatabaseConfig) -> Result<Store, mongodb::error::Error> {
    let mut options = ClientOptions::parse(config.mongo_uri.as_str()).await?;
    if options.app_name.is_none() {
        options.app_name = Some(APP_NAME.to_string());
    }

    let client = Client::with_options(options)?;
    let store = Store::new(client, &config.db_name);

    info!(db_name = %store.db_name(), "MongoDB client ready");
    Ok(store)
}
