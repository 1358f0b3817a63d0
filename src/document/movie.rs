use bson::{Bson, Document as BsonDocument};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const NO_OVERVIEW: &str = "No overview available.";
pub const UNKNOWN_CAST: &str = "Unknown";

/// Read-only view over a schema-less movie document.
///
/// Every accessor tolerates missing fields and unexpected types and falls back
/// to a placeholder instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct MovieView<'a> {
    doc: &'a BsonDocument,
}

impl<'a> MovieView<'a> {
    #[must_use]
    pub const fn new(doc: &'a BsonDocument) -> Self {
        Self { doc }
    }

    #[must_use]
    pub fn title(&self) -> String {
        text_or(self.doc, "title", UNKNOWN_TITLE)
    }

    #[must_use]
    pub fn overview(&self) -> String {
        text_or(self.doc, "overview", NO_OVERVIEW)
    }

    /// Names of the cast in stored order, or `None` when `cast` is absent or not an array.
    #[must_use]
    pub fn cast_names(&self) -> Option<Vec<String>> {
        match self.doc.get("cast") {
            Some(Bson::Array(items)) => Some(
                items
                    .iter()
                    .map(|item| match item {
                        Bson::Document(member) => text_or(member, "name", UNKNOWN_CAST),
                        _ => UNKNOWN_CAST.to_string(),
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}

fn text_or(doc: &BsonDocument, key: &str, default: &str) -> String {
    doc.get(key).and_then(display_value).unwrap_or_else(|| default.to_string())
}

/// Plain-text rendering of a scalar; null and undefined count as absent.
#[must_use]
pub fn display_value(v: &Bson) -> Option<String> {
    match v {
        Bson::Null | Bson::Undefined => None,
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(i) => Some(i.to_string()),
        Bson::Int64(i) => Some(i.to_string()),
        Bson::Double(f) => Some(f.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
