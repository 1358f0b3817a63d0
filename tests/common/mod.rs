#![allow(dead_code)]

use bson::Document as BsonDocument;
use movieshell::query::Filter;
use movieshell::{MemoryStore, MovieStore, ShellError};
use std::cell::RefCell;
use std::rc::Rc;

/// Fake collaborator: serves documents from memory, records every filter it
/// receives and can refuse the connectivity probe.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    reject_with: Option<String>,
    pub queries: Rc<RefCell<Vec<Filter>>>,
}

impl RecordingStore {
    pub fn with_docs(docs: Vec<BsonDocument>) -> Self {
        Self { inner: MemoryStore::new(docs), ..Self::default() }
    }

    pub fn rejecting(message: &str) -> Self {
        Self { reject_with: Some(message.to_string()), ..Self::default() }
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl MovieStore for RecordingStore {
    fn list_collection_names(&self) -> Result<Vec<String>, ShellError> {
        match &self.reject_with {
            Some(msg) => Err(ShellError::Probe(msg.clone())),
            None => self.inner.list_collection_names(),
        }
    }

    fn find(&self, filter: &Filter) -> Result<Vec<BsonDocument>, ShellError> {
        self.queries.borrow_mut().push(filter.clone());
        self.inner.find(filter)
    }
}

/// Run a whole session over `input` against `store`; returns the outcome and stdout text.
pub fn run_script(
    input: &str,
    store: RecordingStore,
) -> (Result<movieshell::cli::SessionOutcome, ShellError>, String) {
    use movieshell::cli::{Console, SecretInput, run_session};
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let outcome = run_session(&mut console, SecretInput::Echo, move |_: &movieshell::Credentials| {
        Ok::<_, ShellError>(store)
    });
    let (_, out) = console.into_parts();
    (outcome, String::from_utf8(out).expect("utf8 output"))
}
