//! Record filter: pure matching over the in-memory dataset.

mod engine;
mod query;

pub use engine::search;
pub use query::{DEFAULT_THRESHOLD, Match, MatchMode, Query, SearchOptions, TagFilter};
