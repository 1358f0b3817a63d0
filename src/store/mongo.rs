use bson::Document as BsonDocument;
use mongodb::sync::{Client, Collection, Database};

use super::MovieStore;
use crate::connection::{COLLECTION_NAME, Credentials, DATABASE_NAME};
use crate::errors::ShellError;
use crate::logger::AUDIT_TARGET;
use crate::query::{Filter, to_bson};

/// The movie collection on the remote cluster, through the driver's blocking API.
pub struct MongoStore {
    database: Database,
    collection: Collection<BsonDocument>,
}

impl MongoStore {
    /// Build a client for the fixed cluster. The driver connects lazily, so bad
    /// credentials only surface on the first request.
    ///
    /// # Errors
    /// Returns `ShellError::Connect` if the connection string cannot be parsed or resolved.
    pub fn connect(credentials: &Credentials) -> Result<Self, ShellError> {
        log::info!(target: AUDIT_TARGET, "connecting to {}", credentials.redacted_connection_string());
        let uri = credentials.connection_string();
        let client = Client::with_uri_str(uri.as_str())
            .map_err(|e| ShellError::Connect(e.to_string()))?;
        let database = client.database(DATABASE_NAME);
        let collection = database.collection::<BsonDocument>(COLLECTION_NAME);
        Ok(Self { database, collection })
    }
}

impl MovieStore for MongoStore {
    fn list_collection_names(&self) -> Result<Vec<String>, ShellError> {
        self.database.list_collection_names().run().map_err(|e| ShellError::Probe(e.to_string()))
    }

    fn find(&self, filter: &Filter) -> Result<Vec<BsonDocument>, ShellError> {
        let cursor = self
            .collection
            .find(to_bson(filter))
            .run()
            .map_err(|e| ShellError::Query(e.to_string()))?;
        cursor.collect::<Result<Vec<_>, _>>().map_err(|e| ShellError::Query(e.to_string()))
    }
}
