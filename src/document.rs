mod movie;

pub use movie::{MovieView, NO_OVERVIEW, UNKNOWN_CAST, UNKNOWN_TITLE, display_value};
