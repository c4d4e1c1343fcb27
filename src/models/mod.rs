//! Core data models for feed entries and search requests.

mod entry;
mod query;
mod search;

pub use entry::Entry;
pub use query::QueryBuilder;
pub use search::{ParseSortError, SearchRequest, SortBy, SortOrder, DEFAULT_MAX_RESULTS};
