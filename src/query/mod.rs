// Submodules for separation of concerns
mod eval;
mod render;
mod types;

// Public API re-exports
pub use eval::{CompiledFilter, eval_filter};
pub use render::to_bson;
pub use types::{Filter, QueryKind};
