use bson::{Bson, Document as BsonDocument};
use regex::{Regex, RegexBuilder};

use super::types::Filter;
use crate::errors::ShellError;

/// A filter with its regular expressions built once, ready to run over many documents.
#[derive(Debug, Clone)]
pub enum CompiledFilter {
    True,
    Eq { path: String, value: Bson },
    ElemMatch { path: String, filter: Box<CompiledFilter> },
    Regex { path: String, re: Regex },
}

impl CompiledFilter {
    /// # Errors
    /// Returns `ShellError::Query` when a pattern is not a valid regular expression.
    pub fn compile(filter: &Filter) -> Result<Self, ShellError> {
        Ok(match filter {
            Filter::True => Self::True,
            Filter::Eq { path, value } => Self::Eq { path: path.clone(), value: value.clone() },
            Filter::ElemMatch { path, filter } => {
                Self::ElemMatch { path: path.clone(), filter: Box::new(Self::compile(filter)?) }
            }
            Filter::Regex { path, pattern, case_insensitive } => {
                let re = RegexBuilder::new(pattern)
                    .case_insensitive(*case_insensitive)
                    .build()
                    .map_err(|e| ShellError::Query(format!("invalid $regex for {path}: {e}")))?;
                Self::Regex { path: path.clone(), re }
            }
        })
    }

    #[must_use]
    pub fn matches(&self, doc: &BsonDocument) -> bool {
        match self {
            Self::True => true,
            Self::Eq { path, value } => match get_path(doc, path) {
                Some(Bson::Array(items)) if !matches!(value, Bson::Array(_)) => {
                    items.iter().any(|x| x == value)
                }
                Some(v) => v == value,
                None => false,
            },
            Self::ElemMatch { path, filter } => match get_path(doc, path) {
                Some(Bson::Array(items)) => items.iter().any(|item| match item {
                    Bson::Document(d) => filter.matches(d),
                    _ => false,
                }),
                _ => false,
            },
            Self::Regex { path, re } => match get_path(doc, path) {
                Some(Bson::String(s)) => re.is_match(s),
                Some(Bson::Array(items)) => {
                    items.iter().any(|x| matches!(x, Bson::String(s) if re.is_match(s)))
                }
                _ => false,
            },
        }
    }
}

/// One-shot evaluation of `filter` against `doc`.
///
/// # Errors
/// See [`CompiledFilter::compile`].
pub fn eval_filter(doc: &BsonDocument, filter: &Filter) -> Result<bool, ShellError> {
    Ok(CompiledFilter::compile(filter)?.matches(doc))
}

fn get_path<'a>(doc: &'a BsonDocument, path: &str) -> Option<&'a Bson> {
    doc.get(path)
}
