//! Display ordering for cached hits.
//!
//! Sorting never touches the store: [`sort_hits`] borrows the stored slice
//! and returns references in display order. Text columns sort ascending,
//! counter columns descending. Counter columns are built as a stable
//! ascending sort followed by a reversal, so hits with equal counts come out
//! in reverse arrival order.

use std::cmp::Ordering;

use crate::domain::Hit;

/// Column a result list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Arrival order from the API.
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl SortKey {
    /// Sortable table columns, left to right.
    pub const COLUMNS: [Self; 4] = [Self::Title, Self::Author, Self::Comments, Self::Points];

    /// Column heading text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Title => "TITLE",
            Self::Author => "AUTHOR",
            Self::Comments => "COMMENTS",
            Self::Points => "POINTS",
        }
    }
}

/// Arrow shown next to the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Returns `hits` ordered by `key`.
///
/// The sort is stable, so equal keys keep their relative order before any
/// reversal. Titles and authors compare ascending with missing values last.
/// Comment and point counts sort ascending and the result is then reversed,
/// so the largest counts come first and ties appear in reverse arrival order.
///
/// # Parameters
///
/// * `hits` - Stored hits in arrival order; never modified
/// * `key` - Column to order by; [`SortKey::None`] keeps arrival order
///
/// # Returns
///
/// References to `hits` in display order.
///
/// # Examples
///
/// ```
/// use hnsearch::domain::Hit;
/// use hnsearch::store::{sort_hits, SortKey};
///
/// let mut a = Hit::new("a", "A");
/// a.points = 1;
/// let mut b = Hit::new("b", "B");
/// b.points = 5;
/// let hits = vec![a, b];
///
/// let sorted: Vec<&str> = sort_hits(&hits, SortKey::Points)
///     .iter()
///     .map(|h| h.object_id.as_str())
///     .collect();
/// assert_eq!(sorted, vec!["b", "a"]);
/// ```
#[must_use]
pub fn sort_hits(hits: &[Hit], key: SortKey) -> Vec<&Hit> {
    let mut sorted: Vec<&Hit> = hits.iter().collect();

    match key {
        SortKey::None => {}
        SortKey::Title => sorted.sort_by(|a, b| cmp_missing_last(a.title.as_deref(), b.title.as_deref())),
        SortKey::Author => sorted.sort_by(|a, b| cmp_missing_last(a.author.as_deref(), b.author.as_deref())),
        SortKey::Comments => {
            sorted.sort_by_key(|hit| hit.num_comments);
            sorted.reverse();
        }
        SortKey::Points => {
            sorted.sort_by_key(|hit| hit.points);
            sorted.reverse();
        }
    }

    sorted
}

/// Ascending comparison with absent values after present ones.
fn cmp_missing_last(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Computes the next `(key, is_reverse)` pair when a column is selected.
///
/// Reverse flips only when the same key is selected again; any other key
/// starts un-reversed.
///
/// # Parameters
///
/// * `current` - Active sort key
/// * `current_reverse` - Whether the active sort is reversed
/// * `requested` - Key the user selected
///
/// # Returns
///
/// The new key (always `requested`) and its reverse flag.
///
/// # Examples
///
/// ```
/// use hnsearch::store::{toggle, SortKey};
///
/// assert_eq!(toggle(SortKey::None, false, SortKey::Title), (SortKey::Title, false));
/// assert_eq!(toggle(SortKey::Title, false, SortKey::Title), (SortKey::Title, true));
/// assert_eq!(toggle(SortKey::Title, true, SortKey::Author), (SortKey::Author, false));
/// ```
#[must_use]
pub fn toggle(current: SortKey, current_reverse: bool, requested: SortKey) -> (SortKey, bool) {
    (requested, requested == current && !current_reverse)
}

/// Active sort column and reverse flag for the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// Column the hits are ordered by.
    pub key: SortKey,
    /// Whether the sorted order is reversed for display.
    pub is_reverse: bool,
}

impl SortState {
    /// Applies a column selection through [`toggle`].
    pub fn select(&mut self, requested: SortKey) {
        let (key, is_reverse) = toggle(self.key, self.is_reverse, requested);
        tracing::debug!(from = ?self.key, to = ?key, is_reverse = is_reverse, "sort changed");
        self.key = key;
        self.is_reverse = is_reverse;
    }

    /// Returns to arrival order, un-reversed.
    pub fn reset(&mut self) {
        tracing::debug!(from = ?self.key, "sort cleared");
        *self = Self::default();
    }

    /// Returns `hits` in display order: sorted, then reversed if requested.
    #[must_use]
    pub fn apply<'a>(&self, hits: &'a [Hit]) -> Vec<&'a Hit> {
        let mut sorted = sort_hits(hits, self.key);
        if self.is_reverse {
            sorted.reverse();
        }
        sorted
    }

    /// Arrow for `column`, or `None` when it is not the active column.
    #[must_use]
    pub fn direction_for(&self, column: SortKey) -> Option<SortDirection> {
        if column != self.key {
            return None;
        }
        Some(if self.is_reverse {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, title: Option<&str>, author: Option<&str>, comments: u32, points: u32) -> Hit {
        Hit {
            object_id: id.to_string(),
            title: title.map(String::from),
            author: author.map(String::from),
            url: None,
            num_comments: comments,
            points,
            created_at_i: None,
        }
    }

    fn sample() -> Vec<Hit> {
        vec![
            hit("1", Some("beta"), Some("zed"), 5, 10),
            hit("2", Some("alpha"), None, 7, 10),
            hit("3", None, Some("amy"), 5, 3),
            hit("4", Some("Gamma"), Some("bob"), 1, 42),
        ]
    }

    fn order(hits: &[&Hit]) -> Vec<String> {
        hits.iter().map(|h| h.object_id.clone()).collect()
    }

    #[test]
    fn none_is_identity() {
        let hits = sample();
        assert_eq!(order(&sort_hits(&hits, SortKey::None)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn title_ascending_with_missing_last() {
        let hits = sample();
        assert_eq!(order(&sort_hits(&hits, SortKey::Title)), vec!["4", "2", "1", "3"]);
    }

    #[test]
    fn author_ascending_with_missing_last() {
        let hits = sample();
        assert_eq!(order(&sort_hits(&hits, SortKey::Author)), vec!["3", "4", "1", "2"]);
    }

    #[test]
    fn comments_descending_with_ties_reversed() {
        let hits = sample();
        assert_eq!(order(&sort_hits(&hits, SortKey::Comments)), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn points_descending_with_ties_reversed() {
        let hits = sample();
        assert_eq!(order(&sort_hits(&hits, SortKey::Points)), vec!["4", "2", "1", "3"]);
    }

    #[test]
    fn sorting_is_deterministic_and_leaves_input_alone() {
        let hits = sample();
        let before = hits.clone();
        for key in [SortKey::None, SortKey::Title, SortKey::Author, SortKey::Comments, SortKey::Points] {
            assert_eq!(order(&sort_hits(&hits, key)), order(&sort_hits(&hits, key)));
        }
        assert_eq!(hits, before);
    }

    #[test]
    fn toggle_rules() {
        assert_eq!(toggle(SortKey::None, false, SortKey::Title), (SortKey::Title, false));
        assert_eq!(toggle(SortKey::Title, false, SortKey::Title), (SortKey::Title, true));
        assert_eq!(toggle(SortKey::Title, true, SortKey::Title), (SortKey::Title, false));
        assert_eq!(toggle(SortKey::Title, true, SortKey::Author), (SortKey::Author, false));
    }

    #[test]
    fn sort_state_applies_reverse_and_reports_direction() {
        let hits = sample();
        let mut state = SortState::default();
        assert_eq!(state.direction_for(SortKey::Title), None);

        state.select(SortKey::Points);
        assert_eq!(order(&state.apply(&hits)), vec!["4", "2", "1", "3"]);
        assert_eq!(state.direction_for(SortKey::Points), Some(SortDirection::Ascending));

        state.select(SortKey::Points);
        assert_eq!(order(&state.apply(&hits)), vec!["3", "1", "2", "4"]);
        assert_eq!(state.direction_for(SortKey::Points), Some(SortDirection::Descending));
        assert_eq!(state.direction_for(SortKey::Title), None);
    }

    #[test]
    fn reset_always_lands_on_arrival_order() {
        let hits = sample();
        let mut state = SortState::default();
        state.select(SortKey::Title);
        state.select(SortKey::Title);

        state.reset();
        state.reset();
        assert_eq!(state, SortState::default());
        assert_eq!(order(&state.apply(&hits)), vec!["1", "2", "3", "4"]);
    }
}
