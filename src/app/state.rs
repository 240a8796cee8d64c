//! Application state management and view model computation.
//!
//! [`AppState`] is the single state container for the plugin. It owns the
//! result cache, the search input, the loading flag and last error, the sort
//! state and the table selection. All mutation goes through the event
//! handler, which calls the transition methods defined here.
//!
//! # Fetch lifecycle
//!
//! ```text
//! IDLE ──begin_fetch──▶ LOADING ──complete_fetch(Ok)──▶ SUCCESS ─▶ IDLE
//!                           └────complete_fetch(Err)──▶ FAILURE ─▶ IDLE
//! ```
//!
//! Requests are not tracked individually: a second fetch may start while one
//! is in flight, and whichever completes first clears the loading flag.
//!
//! # Example
//!
//! ```rust
//! use hnsearch::app::AppState;
//! use hnsearch::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 100);
//! state.set_search_term("rust");
//! let request = state.submit_search();
//! assert!(request.is_some());
//! assert!(state.is_loading());
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;

use super::modes::InputMode;
use crate::api::{SearchPage, SearchRequest};
use crate::domain::{FetchFailure, Hit};
use crate::store::{ResultStore, SortKey, SortState};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeader, ColumnLayout, DisplayItem, EmptyState, ErrorNotice, FooterInfo, HeaderInfo,
    MoreButton, SearchBarInfo, TableView, UIViewModel,
};

/// Rows used by everything except table rows: blank line, header, border,
/// search box (3), column headings, more button, border, footer, last line.
const CHROME_ROWS: usize = 11;

/// Shown in place of the table whenever a fetch has failed.
const ERROR_MESSAGE: &str = "Something went wrong.";

/// Central application state container.
///
/// Holds the result cache together with everything the table needs to render
/// it: the active search, the input contents, fetch status, sort and
/// selection. Mutated by the event handler; view models are computed on
/// demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cached hits per search term.
    ///
    /// Only grows through `complete_fetch` and shrinks through `dismiss`.
    pub store: ResultStore,

    /// Term whose results are displayed.
    ///
    /// Copied from `search_term` on submit and mount. May legitimately be
    /// empty, so use `has_searched` to tell whether a search was issued.
    pub search_key: String,

    /// Whether a search has been submitted or mounted since startup.
    pub has_searched: bool,

    /// Contents of the search input.
    ///
    /// Edited by `Char`, `Backspace` and `SearchChange` events. Only becomes
    /// the active search on submit.
    pub search_term: String,

    /// Whether a fetch has been issued and not yet answered.
    ///
    /// A single flag shared by all requests; the first completion clears it.
    pub is_loading: bool,

    /// Most recent fetch failure, cleared by the next successful fetch.
    pub last_error: Option<FetchFailure>,

    /// Active sort column and direction.
    pub sort: SortState,

    /// Zero-based selected row in display order.
    ///
    /// Reset on submit and sort changes, clamped after dismissals and
    /// fetches, wrapped by `move_selection_up/down()`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Page size requested from the API.
    pub hits_per_page: u32,
}

impl AppState {
    /// Creates an empty state with no search issued yet.
    ///
    /// # Parameters
    ///
    /// * `theme` - Color scheme for UI rendering
    /// * `hits_per_page` - Page size sent with every request
    ///
    /// # Example
    ///
    /// ```rust
    /// use hnsearch::app::AppState;
    /// use hnsearch::ui::theme::Theme;
    ///
    /// let state = AppState::new(Theme::default(), 50);
    /// assert!(!state.has_searched);
    /// assert!(state.display_hits().is_empty());
    /// ```
    #[must_use]
    pub fn new(theme: Theme, hits_per_page: u32) -> Self {
        Self {
            store: ResultStore::new(),
            search_key: String::new(),
            has_searched: false,
            search_term: String::new(),
            is_loading: false,
            last_error: None,
            sort: SortState::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
            hits_per_page,
        }
    }

    /// Hits for the active search in display order (sorted, maybe reversed).
    #[must_use]
    pub fn display_hits(&self) -> Vec<&Hit> {
        self.sort.apply(&self.store.get(&self.search_key).hits)
    }

    /// Last page merged for the active search, 0 if none.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.store.get(&self.search_key).page
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&FetchFailure> {
        self.last_error.as_ref()
    }

    /// Replaces the search input contents.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        tracing::trace!(search_term = %self.search_term, "search term changed");
    }

    /// Makes the search input the active search.
    ///
    /// The selection returns to the top. Terms already in the store are shown
    /// as cached, without refetching, even if the cached rows are stale.
    ///
    /// # Returns
    ///
    /// * `Some(request)` - Page 0 of an uncached term; the state is now loading
    /// * `None` - The term is cached and nothing needs fetching
    ///
    /// # Example
    ///
    /// ```rust
    /// use hnsearch::app::AppState;
    /// use hnsearch::ui::theme::Theme;
    ///
    /// let mut state = AppState::new(Theme::default(), 100);
    /// state.set_search_term("rust");
    /// state.store.merge("rust", vec![], 0);
    ///
    /// assert_eq!(state.submit_search(), None);
    /// assert!(!state.is_loading());
    /// ```
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        self.activate_search_term();

        if self.store.contains(&self.search_key) {
            tracing::debug!(search_key = %self.search_key, "using cached results");
            return None;
        }

        Some(self.begin_fetch(self.search_key.clone(), 0))
    }

    /// Makes the search input the active search and fetches page 0 regardless of cache.
    ///
    /// Used once permissions are granted. Unlike [`AppState::submit_search`],
    /// a cached term is fetched again and the new hits are appended.
    ///
    /// # Returns
    ///
    /// The page 0 request for the active search.
    pub fn mount(&mut self) -> SearchRequest {
        self.activate_search_term();
        self.begin_fetch(self.search_key.clone(), 0)
    }

    fn activate_search_term(&mut self) {
        self.search_key.clone_from(&self.search_term);
        self.has_searched = true;
        self.selected_index = 0;
    }

    /// Requests the page after the last one merged for the active search.
    ///
    /// There is no in-flight guard: calling this twice before a response
    /// arrives asks for the same page twice.
    ///
    /// # Returns
    ///
    /// A request for `current_page() + 1` of the active search.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hnsearch::app::AppState;
    /// use hnsearch::ui::theme::Theme;
    ///
    /// let mut state = AppState::new(Theme::default(), 100);
    /// state.store.merge("", vec![], 3);
    /// assert_eq!(state.load_more().page, 4);
    /// ```
    pub fn load_more(&mut self) -> SearchRequest {
        let next_page = self.current_page() + 1;
        self.begin_fetch(self.search_key.clone(), next_page)
    }

    /// Enters the loading state and describes the request to issue.
    ///
    /// # Parameters
    ///
    /// * `term` - Search term the hits will be stored under
    /// * `page` - Zero-based page to request
    ///
    /// # Returns
    ///
    /// A [`SearchRequest`] carrying the configured page size.
    pub fn begin_fetch(&mut self, term: String, page: u32) -> SearchRequest {
        self.is_loading = true;
        tracing::debug!(term = %term, page = page, "fetch started");
        SearchRequest::new(term, page, self.hits_per_page)
    }

    /// Applies the outcome of a request.
    ///
    /// On success the hits are merged under the term the request was issued
    /// for, even if another term has become active since, and any previous
    /// error is cleared. The page recorded is the one the API echoed, or the
    /// requested page when the body leaves it out. On failure the store is
    /// left untouched and the failure is kept for display. The loading flag
    /// is cleared either way and the selection is clamped.
    ///
    /// # Parameters
    ///
    /// * `request` - The request as issued, recovered from the response context
    /// * `outcome` - Decoded page, or the failure to show
    ///
    /// # Tracing
    ///
    /// Logs successes at debug level and failures at warn level.
    pub fn complete_fetch(&mut self, request: &SearchRequest, outcome: Result<SearchPage, FetchFailure>) {
        self.is_loading = false;

        match outcome {
            Ok(page) => {
                let page_number = page.page.unwrap_or_else(|| {
                    tracing::debug!(requested = request.page, "response has no page, using requested page");
                    request.page
                });
                tracing::debug!(
                    term = %request.query,
                    page = page_number,
                    hits = page.hits.len(),
                    is_active = request.query == self.search_key,
                    "fetch succeeded"
                );
                self.store.merge(&request.query, page.hits, page_number);
                self.last_error = None;
            }
            Err(failure) => {
                tracing::warn!(term = %request.query, page = request.page, error = %failure, "fetch failed");
                self.last_error = Some(failure);
            }
        }

        self.clamp_selection();
    }

    /// Removes a hit from the active search's results.
    ///
    /// Dismissing an id that is not present changes nothing.
    ///
    /// # Parameters
    ///
    /// * `object_id` - API object id of the hit to drop
    ///
    /// # Returns
    ///
    /// `true` if at least one hit was removed.
    pub fn dismiss(&mut self, object_id: &str) -> bool {
        let removed = self.store.remove_hit(&self.search_key, object_id) > 0;
        self.clamp_selection();
        removed
    }

    /// Hit under the selection cursor, if any.
    #[must_use]
    pub fn selected_hit(&self) -> Option<&Hit> {
        self.display_hits().get(self.selected_index).copied()
    }

    /// Selects a sort column, toggling reverse when it is already active.
    ///
    /// The selection returns to the top.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort.select(key);
        self.selected_index = 0;
    }

    /// Returns to arrival order, un-reversed, and moves the selection to the top.
    pub fn clear_sort(&mut self) {
        self.sort.reset();
        self.selected_index = 0;
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let len = self.store.get(&self.search_key).hits.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let len = self.store.get(&self.search_key).hits.len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.get(&self.search_key).hits.len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around selected index
    /// 3. Adjust window if near the end to keep it full
    /// 4. Compute relative selection index within visible window
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`] ready for the component renderers.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = ColumnLayout::for_width(cols);

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search_term.clone(),
                is_editing: self.input_mode == InputMode::Editing,
            },
            columns: self.compute_columns(),
            layout,
            body: self.compute_body(rows, &layout),
            more: if self.is_loading {
                MoreButton::Loading
            } else {
                MoreButton::Ready {
                    next_page: self.current_page() + 1,
                }
            },
            footer: self.compute_footer(),
        }
    }

    fn compute_body(&self, rows: usize, layout: &ColumnLayout) -> TableView {
        if let Some(failure) = &self.last_error {
            return TableView::Failed(ErrorNotice {
                message: ERROR_MESSAGE.to_string(),
                detail: failure.message.clone(),
            });
        }

        let hits = self.display_hits();

        if hits.is_empty() {
            if self.is_loading {
                return TableView::Loading;
            }
            let message = if !self.has_searched {
                "No search yet".to_string()
            } else {
                format!("No results for \"{}\"", self.search_key)
            };
            return TableView::Empty(EmptyState {
                message,
                subtitle: "Press / to search Hacker News".to_string(),
            });
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(hits.len());
        if visible_end - visible_start < available_rows && hits.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let tokens: Vec<&str> = self.search_key.split_whitespace().collect();
        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let now = chrono::Utc::now().timestamp();
        let rows = hits[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, hit)| {
                let is_selected = visible_start + relative_idx == self.selected_index;
                Self::compute_display_item(hit, is_selected, layout, matcher.as_ref().map(|m| (m, tokens.as_slice())), now)
            })
            .collect();

        TableView::Ready {
            rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
        }
    }

    fn compute_display_item(
        hit: &Hit,
        is_selected: bool,
        layout: &ColumnLayout,
        matcher: Option<(&SkimMatcherV2, &[&str])>,
        now: i64,
    ) -> DisplayItem {
        let title_width = layout.title.saturating_sub(1);
        let title = truncate(hit.title_or_empty(), title_width);
        let highlight_ranges = matcher.map_or_else(Vec::new, |(m, tokens)| {
            let title_len = title.chars().count();
            compute_highlight_ranges(&title, tokens, m)
                .into_iter()
                .filter(|&(start, _)| start < title_len)
                .map(|(start, end)| (start, end.min(title_len)))
                .collect()
        });

        DisplayItem {
            title,
            author: truncate(hit.author_or_empty(), layout.author.saturating_sub(1)),
            comments: hit.num_comments.to_string(),
            points: hit.points.to_string(),
            age: hit.time_ago_at(now),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        if !self.has_searched {
            return HeaderInfo {
                title: " Hacker News Search ".to_string(),
            };
        }
        let entry = self.store.get(&self.search_key);
        HeaderInfo {
            title: format!(
                " Hacker News Search · {} ({} hits, page {}) ",
                self.search_key,
                entry.hits.len(),
                entry.page
            ),
        }
    }

    fn compute_columns(&self) -> Vec<ColumnHeader> {
        SortKey::COLUMNS
            .iter()
            .zip(['1', '2', '3', '4'])
            .map(|(&key, hint)| ColumnHeader::new(key, hint, self.sort.direction_for(key)))
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Editing => "Type to edit  Enter: search  Esc: cancel".to_string(),
            InputMode::Normal => {
                "j/k: move  /: search  1-4: sort  0: unsort  d: dismiss  m: more  Enter: open  q: quit"
                    .to_string()
            }
        };
        FooterInfo { keybindings }
    }
}

/// Truncates to `max_chars` characters, marking the cut with "...".
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut out: String = text.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}

/// Computes merged character ranges of `text` matched by any search token.
///
/// Each token is fuzzy-matched case-insensitively; matched character indices
/// from all tokens are coalesced into contiguous `(start, end)` ranges.
fn compute_highlight_ranges(text: &str, tokens: &[&str], matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let lowered = text.to_lowercase();
    if lowered.chars().count() != text.chars().count() {
        return vec![];
    }

    let mut indices: Vec<usize> = tokens
        .iter()
        .filter_map(|token| matcher.fuzzy_indices(&lowered, &token.to_lowercase()))
        .flat_map(|(_score, idx)| idx)
        .collect();
    indices.sort_unstable();
    indices.dedup();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
