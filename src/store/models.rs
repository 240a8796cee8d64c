//! Result store record types.

use crate::domain::Hit;

/// Literal search term used to key cached results.
pub type SearchKey = String;

/// Accumulated results for one search term.
///
/// `hits` keeps arrival order across every page fetched so far; `page` is the
/// last page merged in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultEntry {
    pub hits: Vec<Hit>,
    pub page: u32,
}

impl ResultEntry {
    /// The sentinel returned for keys that were never fetched.
    pub const EMPTY: Self = Self {
        hits: Vec::new(),
        page: 0,
    };
}
