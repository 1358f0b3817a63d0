use bson::{Document as BsonDocument, doc};

use super::types::Filter;

/// Render a filter as the MongoDB query document the driver sends.
#[must_use]
pub fn to_bson(filter: &Filter) -> BsonDocument {
    match filter {
        Filter::True => BsonDocument::new(),
        Filter::Eq { path, value } => {
            let mut d = BsonDocument::new();
            d.insert(path.clone(), value.clone());
            d
        }
        Filter::ElemMatch { path, filter } => {
            let mut d = BsonDocument::new();
            d.insert(path.clone(), doc! { "$elemMatch": to_bson(filter) });
            d
        }
        Filter::Regex { path, pattern, case_insensitive } => {
            let options = if *case_insensitive { "i" } else { "" };
            let mut d = BsonDocument::new();
            d.insert(path.clone(), doc! { "$regex": pattern.as_str(), "$options": options });
            d
        }
    }
}
