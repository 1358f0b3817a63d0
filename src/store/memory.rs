use bson::{Bson, Document as BsonDocument};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::MovieStore;
use crate::connection::COLLECTION_NAME;
use crate::errors::ShellError;
use crate::query::{CompiledFilter, Filter};

/// Movie collection held in memory. Backs `--dataset` runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: Vec<BsonDocument>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(docs: Vec<BsonDocument>) -> Self {
        Self { docs }
    }

    /// Load a dataset file; see [`MemoryStore::from_reader`].
    ///
    /// # Errors
    /// Returns `ShellError::Io` if the file cannot be opened, otherwise as `from_reader`.
    pub fn from_path(path: &Path) -> Result<Self, ShellError> {
        let f = std::fs::File::open(path)?;
        let store = Self::from_reader(f)?;
        log::info!("loaded {} documents from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse NDJSON (one object per line, blank lines skipped) or a single JSON array.
    /// Extended JSON such as `{"$oid": ...}` is accepted.
    ///
    /// # Errors
    /// Returns `ShellError::Dataset` naming the offending record.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ShellError> {
        let mut reader = BufReader::new(reader);
        let mut head = String::new();
        // Peek past leading blank lines to pick the format.
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            let blank = line.trim().is_empty();
            head.push_str(&line);
            if !blank {
                break;
            }
        }
        if head.trim_start().starts_with('[') {
            let mut s = head;
            reader.read_to_string(&mut s)?;
            let val: serde_json::Value = serde_json::from_str(&s)?;
            let arr = val
                .as_array()
                .ok_or_else(|| ShellError::Dataset("expected JSON array".into()))?;
            let docs = arr
                .iter()
                .enumerate()
                .map(|(i, v)| to_document(v.clone(), &format!("element {i}")))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self::new(docs));
        }

        let mut docs = Vec::new();
        let mut line_no: usize = 0;
        let mut pending = Some(head);
        let mut buf = String::with_capacity(8 * 1024);
        loop {
            let line = if let Some(h) = pending.take() {
                h
            } else {
                buf.clear();
                if reader.read_line(&mut buf)? == 0 {
                    break;
                }
                std::mem::take(&mut buf)
            };
            // The peeked head may hold several leading blank lines.
            for part in line.lines() {
                line_no += 1;
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                let v: serde_json::Value = serde_json::from_str(part)
                    .map_err(|e| ShellError::Dataset(format!("line {line_no}: {e}")))?;
                docs.push(to_document(v, &format!("line {line_no}"))?);
            }
        }
        Ok(Self::new(docs))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

fn to_document(v: serde_json::Value, at: &str) -> Result<BsonDocument, ShellError> {
    match Bson::try_from(v) {
        Ok(Bson::Document(d)) => Ok(d),
        Ok(_) => Err(ShellError::Dataset(format!("{at}: expected a JSON object"))),
        Err(e) => Err(ShellError::Dataset(format!("{at}: {e}"))),
    }
}

impl MovieStore for MemoryStore {
    fn list_collection_names(&self) -> Result<Vec<String>, ShellError> {
        Ok(vec![COLLECTION_NAME.to_string()])
    }

    fn find(&self, filter: &Filter) -> Result<Vec<BsonDocument>, ShellError> {
        let compiled = CompiledFilter::compile(filter)?;
        Ok(self.docs.iter().filter(|d| compiled.matches(d)).cloned().collect())
    }
}
