use bson::Bson;

/// Predicate over a movie document, rendered to a MongoDB filter for the
/// remote store and evaluated directly by the in-memory store.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document.
    True,
    /// Exact, case-sensitive equality. An array field matches when any element is equal.
    Eq { path: String, value: Bson },
    /// Matches when at least one element of the array at `path` satisfies `filter`.
    ElemMatch { path: String, filter: Box<Filter> },
    /// Regular-expression search on a string field.
    Regex { path: String, pattern: String, case_insensitive: bool },
}

impl Filter {
    /// Unfiltered scan.
    #[must_use]
    pub const fn all() -> Self {
        Self::True
    }

    /// Movies whose `cast` holds an entry named exactly `name`.
    #[must_use]
    pub fn cast_member(name: &str) -> Self {
        Self::ElemMatch {
            path: "cast".into(),
            filter: Box::new(Self::Eq { path: "name".into(), value: Bson::String(name.to_string()) }),
        }
    }

    /// Movies whose `overview` matches `keyword` ignoring case.
    /// The keyword is used as a regular expression, so plain words match as substrings.
    #[must_use]
    pub fn overview_keyword(keyword: &str) -> Self {
        Self::Regex { path: "overview".into(), pattern: keyword.to_string(), case_insensitive: true }
    }
}

/// The three canned queries, used for audit logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    ListAll,
    ByCast,
    ByKeyword,
}

impl QueryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListAll => "list_all",
            Self::ByCast => "by_cast",
            Self::ByKeyword => "by_keyword",
        }
    }
}
