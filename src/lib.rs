//! Interactive movie lookup over a MongoDB collection.
//!
//! The binary collects credentials, verifies them with a connectivity probe
//! and then serves a four-option menu. Everything below the binary works
//! against the [`store::MovieStore`] trait, so an in-memory collection can
//! stand in for the remote cluster.

pub mod cli;
pub mod config;
pub mod connection;
pub mod document;
pub mod errors;
pub mod logger;
pub mod query;
pub mod store;

pub use crate::connection::Credentials;
pub use crate::errors::ShellError;
pub use crate::store::{MemoryStore, MongoStore, MovieStore, VerifiedStore, connect_and_verify};
