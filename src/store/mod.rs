//! Result cache and display ordering.
//!
//! # Modules
//!
//! - `models`: Cache entry types
//! - `results`: Per-search-term hit cache with append-only merge
//! - `sort`: Column sorting and reverse toggling

pub mod models;
pub mod results;
pub mod sort;

pub use models::{ResultEntry, SearchKey};
pub use results::ResultStore;
pub use sort::{sort_hits, toggle, SortDirection, SortKey, SortState};
