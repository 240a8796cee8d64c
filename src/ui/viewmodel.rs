//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready strings and flags only; sorting, windowing and truncation
//! have already happened by the time a view model exists.
//!
//! The table body is a tagged variant ([`TableView`]) and the pagination
//! button another ([`MoreButton`]), so the renderer picks exactly one layout
//! per state instead of layering wrappers.

use crate::store::{SortDirection, SortKey};

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title with active search and counts).
    pub header: HeaderInfo,

    /// Search input box.
    pub search_bar: SearchBarInfo,

    /// Table column headings with sort indicators.
    pub columns: Vec<ColumnHeader>,

    /// Column widths for the current terminal width.
    pub layout: ColumnLayout,

    /// Table body.
    pub body: TableView,

    /// Pagination button state.
    pub more: MoreButton,

    /// Footer information (keybindings).
    pub footer: FooterInfo,
}

/// What the table area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    /// Rows to display, windowed around the selection.
    Ready {
        rows: Vec<DisplayItem>,
        /// Index of the selected row within `rows`.
        selected_index: usize,
    },

    /// First page for the active search is still in flight.
    Loading,

    /// Nothing to show for the active search.
    Empty(EmptyState),

    /// The last search failed; replaces the table entirely.
    Failed(ErrorNotice),
}

/// Display information for a single hit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,

    /// Author, truncated to the author column.
    pub author: String,

    /// Comment count, pre-formatted.
    pub comments: String,

    /// Point count, pre-formatted.
    pub points: String,

    /// Relative age (e.g. "3h").
    pub age: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of `title` matching the active search.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// One column heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Heading text.
    pub label: &'static str,

    /// Key that sorts by this column.
    pub key_hint: char,

    /// Sort arrow, when this is the active column.
    pub direction: Option<SortDirection>,
}

impl ColumnHeader {
    /// Builds the heading for a sortable column.
    #[must_use]
    pub const fn new(key: SortKey, key_hint: char, direction: Option<SortDirection>) -> Self {
        Self {
            label: key.label(),
            key_hint,
            direction,
        }
    }
}

/// Column widths in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub title: usize,
    pub author: usize,
    pub comments: usize,
    pub points: usize,
    pub age: usize,
}

impl ColumnLayout {
    const AUTHOR_WIDTH: usize = 16;
    const COMMENTS_WIDTH: usize = 11;
    const POINTS_WIDTH: usize = 9;
    const AGE_WIDTH: usize = 7;
    const MIN_TITLE_WIDTH: usize = 10;

    /// Gives fixed widths to the narrow columns and the rest to the title.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hnsearch::ui::ColumnLayout;
    ///
    /// let layout = ColumnLayout::for_width(100);
    /// assert_eq!(layout.title, 100 - 16 - 11 - 9 - 7);
    /// ```
    #[must_use]
    pub const fn for_width(cols: usize) -> Self {
        let fixed = Self::AUTHOR_WIDTH + Self::COMMENTS_WIDTH + Self::POINTS_WIDTH + Self::AGE_WIDTH;
        let title = cols.saturating_sub(fixed);
        Self {
            title: if title < Self::MIN_TITLE_WIDTH { Self::MIN_TITLE_WIDTH } else { title },
            author: Self::AUTHOR_WIDTH,
            comments: Self::COMMENTS_WIDTH,
            points: Self::POINTS_WIDTH,
            age: Self::AGE_WIDTH,
        }
    }
}

/// Pagination button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoreButton {
    /// A request is in flight; the button shows a loading indicator.
    Loading,

    /// The next page that "more" would fetch.
    Ready { next_page: u32 },
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty table message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No results").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Error notice shown in place of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    /// Generic, user-facing message.
    pub message: String,

    /// Underlying failure description.
    pub detail: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current contents of the search input.
    pub query: String,

    /// Whether the input has focus.
    pub is_editing: bool,
}
