//! Document-store collaborators.
//!
//! The session only talks to a [`MovieStore`]. Queries run through a
//! [`VerifiedStore`], which exists only after the connectivity probe passed.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use bson::Document as BsonDocument;

use crate::errors::ShellError;
use crate::logger::AUDIT_TARGET;
use crate::query::{Filter, QueryKind};

pub trait MovieStore {
    /// Lightweight metadata request; doubles as the connectivity probe.
    ///
    /// # Errors
    /// Returns an error when the store is unreachable or rejects the credentials.
    fn list_collection_names(&self) -> Result<Vec<String>, ShellError>;

    /// Every document of the movie collection matching `filter`, fully materialized.
    ///
    /// # Errors
    /// Returns `ShellError::Query` when the query cannot be executed.
    fn find(&self, filter: &Filter) -> Result<Vec<BsonDocument>, ShellError>;
}

impl<S: MovieStore + ?Sized> MovieStore for Box<S> {
    fn list_collection_names(&self) -> Result<Vec<String>, ShellError> {
        (**self).list_collection_names()
    }

    fn find(&self, filter: &Filter) -> Result<Vec<BsonDocument>, ShellError> {
        (**self).find(filter)
    }
}

/// A store whose connectivity probe succeeded.
#[derive(Debug)]
pub struct VerifiedStore<S> {
    store: S,
    collections: Vec<String>,
}

impl<S: MovieStore> VerifiedStore<S> {
    /// Run one of the canned queries.
    ///
    /// # Errors
    /// Propagates the store's query error.
    pub fn find(&self, kind: QueryKind, filter: &Filter) -> Result<Vec<BsonDocument>, ShellError> {
        log::debug!("query {} filter={}", kind.as_str(), crate::query::to_bson(filter));
        match self.store.find(filter) {
            Ok(docs) => {
                log::info!(target: AUDIT_TARGET, "query={} results={}", kind.as_str(), docs.len());
                Ok(docs)
            }
            Err(e) => {
                log::error!(target: AUDIT_TARGET, "query={} failed: {e}", kind.as_str());
                Err(e)
            }
        }
    }

    /// Collection names reported by the probe.
    pub fn collections(&self) -> &[String] {
        &self.collections
    }
}

/// Probe `store` once. Any failure is reported as `ShellError::Probe` and the store is dropped.
///
/// # Errors
/// Returns `ShellError::Probe` carrying the underlying error text.
pub fn connect_and_verify<S: MovieStore>(store: S) -> Result<VerifiedStore<S>, ShellError> {
    match store.list_collection_names() {
        Ok(collections) => {
            log::info!(target: AUDIT_TARGET, "probe ok collections={}", collections.len());
            Ok(VerifiedStore { store, collections })
        }
        Err(e) => {
            log::warn!(target: AUDIT_TARGET, "probe failed: {e}");
            Err(match e {
                ShellError::Probe(msg) => ShellError::Probe(msg),
                other => ShellError::Probe(other.to_string()),
            })
        }
    }
}
