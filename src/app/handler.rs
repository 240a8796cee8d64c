//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns user input, plugin
//! lifecycle notifications and web responses into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, mount, web responses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search input**: `EditSearch`, `SearchChange`, `Char`, `Backspace`, `CancelEdit`, `SubmitSearch`
//! - **Results**: `Dismiss`, `DismissSelected`, `Sort`, `ClearSort`, `LoadMore`, `OpenSelected`
//! - **System**: `Mount`, `SearchCompleted`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use hnsearch::app::{AppState, Event, handle_event};
//! use hnsearch::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 100);
//! let (should_render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::api::{SearchPage, SearchRequest};
use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::FetchFailure;
use crate::store::SortKey;

/// Events triggered by user input, the plugin lifecycle, or web responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions were granted; runs the initial search for the input term.
    ///
    /// Always fetches, whether or not the term is cached.
    Mount,

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Gives the search input focus.
    EditSearch,
    /// Replaces the search input contents.
    SearchChange(String),
    /// Appends a character to the search input.
    Char(char),
    /// Removes the last character from the search input.
    Backspace,
    /// Leaves the search input without submitting.
    CancelEdit,
    /// Makes the search input the active search, fetching if not cached.
    SubmitSearch,

    /// Removes the hit with this object ID from the active search.
    Dismiss(String),
    /// Removes the selected hit from the active search.
    DismissSelected,
    /// Selects a sort column (toggles reverse on the active one).
    Sort(SortKey),
    /// Returns to arrival order, un-reversed, whatever the current sort.
    ClearSort,
    /// Fetches the next page of the active search.
    LoadMore,
    /// Opens the selected hit's link.
    OpenSelected,

    /// A search request finished.
    ///
    /// `request` is the request as issued, recovered from the web request
    /// context; its query decides which cache entry receives the hits.
    SearchCompleted {
        request: SearchRequest,
        outcome: std::result::Result<SearchPage, FetchFailure>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Fetches come back as [`Action::FetchPage`]; the outcome arrives later as
/// [`Event::SearchCompleted`]. Events that change nothing, such as a
/// backspace on an empty input or a dismiss with no selection, skip the
/// render.
///
/// # Parameters
///
/// * `state` - Mutable application state to update
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of:
/// * `bool` - Whether the UI should re-render
/// * `Vec<Action>` - Actions to execute, in order
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for
/// handlers that touch the filesystem.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::Mount => {
            tracing::debug!(search_term = %state.search_term, "mounted");
            let request = state.mount();
            Ok((true, vec![Action::FetchPage(request)]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::EditSearch => {
            state.input_mode = InputMode::Editing;
            Ok((true, vec![]))
        }
        Event::SearchChange(text) => {
            state.set_search_term(text.as_str());
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let mut term = state.search_term.clone();
            term.push(*c);
            state.set_search_term(term);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let mut term = state.search_term.clone();
            if term.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.set_search_term(term);
            Ok((true, vec![]))
        }
        Event::CancelEdit => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            state.input_mode = InputMode::Normal;
            let actions = state.submit_search().map(Action::FetchPage).into_iter().collect();
            Ok((true, actions))
        }
        Event::Dismiss(object_id) => {
            let removed = state.dismiss(object_id);
            tracing::debug!(object_id = %object_id, removed, "dismiss");
            Ok((removed, vec![]))
        }
        Event::DismissSelected => {
            let Some(object_id) = state.selected_hit().map(|hit| hit.object_id.clone()) else {
                tracing::debug!("no hit selected");
                return Ok((false, vec![]));
            };
            let removed = state.dismiss(&object_id);
            tracing::debug!(object_id = %object_id, removed, "dismiss selected");
            Ok((removed, vec![]))
        }
        Event::Sort(key) => {
            state.sort_by(*key);
            Ok((true, vec![]))
        }
        Event::ClearSort => {
            state.clear_sort();
            Ok((true, vec![]))
        }
        Event::LoadMore => {
            let request = state.load_more();
            Ok((true, vec![Action::FetchPage(request)]))
        }
        Event::OpenSelected => {
            let Some(hit) = state.selected_hit() else {
                return Ok((false, vec![]));
            };
            let url = hit.link();
            tracing::debug!(object_id = %hit.object_id, url = %url, "opening link");
            Ok((false, vec![Action::OpenUrl(url)]))
        }
        Event::SearchCompleted { request, outcome } => {
            state.complete_fetch(request, outcome.clone());
            Ok((true, vec![]))
        }
    }
}

/// Short event name for span fields; avoids dumping whole response pages.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mount => "Mount",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::CloseFocus => "CloseFocus",
        Event::EditSearch => "EditSearch",
        Event::SearchChange(_) => "SearchChange",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::CancelEdit => "CancelEdit",
        Event::SubmitSearch => "SubmitSearch",
        Event::Dismiss(_) => "Dismiss",
        Event::DismissSelected => "DismissSelected",
        Event::Sort(_) => "Sort",
        Event::ClearSort => "ClearSort",
        Event::LoadMore => "LoadMore",
        Event::OpenSelected => "OpenSelected",
        Event::SearchCompleted { .. } => "SearchCompleted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Hit;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        let mut state = AppState::new(Theme::default(), 100);
        state.set_search_term("redux");
        state
    }

    fn page(ids: &[&str], page: u32) -> SearchPage {
        SearchPage {
            hits: ids.iter().map(|id| Hit::new(*id, *id)).collect(),
            page: Some(page),
        }
    }

    fn fetched(actions: &[Action]) -> &SearchRequest {
        match actions {
            [Action::FetchPage(request)] => request,
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    #[test]
    fn mount_fetches_even_when_cached() {
        let mut state = state();
        state.store.merge("redux", vec![Hit::new("a", "A")], 0);

        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let request = fetched(&actions);
        assert_eq!(request.query, "redux");
        assert_eq!(request.page, 0);
        assert!(state.is_loading());
    }

    #[test]
    fn editing_then_submit_fetches_once() {
        let mut state = AppState::new(Theme::default(), 50);
        handle_event(&mut state, &Event::EditSearch).unwrap();
        for c in "rustt".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_term, "rust");

        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(fetched(&actions), &SearchRequest::new("rust", 0, 50));
    }

    #[test]
    fn backspace_on_empty_term_skips_render() {
        let mut state = AppState::new(Theme::default(), 100);
        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
    }

    #[test]
    fn cancel_edit_keeps_term_without_fetching() {
        let mut state = state();
        handle_event(&mut state, &Event::EditSearch).unwrap();
        handle_event(&mut state, &Event::SearchChange("vue".into())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::CancelEdit).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_term, "vue");
        assert_eq!(state.search_key, "");
    }

    #[test]
    fn dismiss_selected_uses_display_order() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let request = fetched(&actions).clone();

        let mut low = Hit::new("low", "low");
        low.points = 1;
        let mut high = Hit::new("high", "high");
        high.points = 50;
        handle_event(
            &mut state,
            &Event::SearchCompleted {
                request,
                outcome: Ok(SearchPage {
                    hits: vec![low, high],
                    page: Some(0),
                }),
            },
        )
        .unwrap();

        handle_event(&mut state, &Event::Sort(SortKey::Points)).unwrap();
        let (render, _) = handle_event(&mut state, &Event::DismissSelected).unwrap();
        assert!(render);

        let remaining: Vec<_> = state.display_hits().iter().map(|h| h.object_id.clone()).collect();
        assert_eq!(remaining, vec!["low"]);
    }

    #[test]
    fn clear_sort_twice_keeps_arrival_order() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let request = fetched(&actions).clone();
        handle_event(
            &mut state,
            &Event::SearchCompleted {
                request,
                outcome: Ok(page(&["a", "b", "c"], 0)),
            },
        )
        .unwrap();
        handle_event(&mut state, &Event::Sort(SortKey::Title)).unwrap();

        for _ in 0..2 {
            let (render, actions) = handle_event(&mut state, &Event::ClearSort).unwrap();
            assert!(render);
            assert!(actions.is_empty());
            let order: Vec<_> = state.display_hits().iter().map(|h| h.object_id.clone()).collect();
            assert_eq!(order, vec!["a", "b", "c"]);
            assert!(!state.sort.is_reverse);
        }
    }

    #[test]
    fn load_more_requests_next_page_of_active_key() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let request = fetched(&actions).clone();
        handle_event(
            &mut state,
            &Event::SearchCompleted {
                request,
                outcome: Ok(page(&["a"], 0)),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert_eq!(fetched(&actions), &SearchRequest::new("redux", 1, 100));
    }

    #[test]
    fn open_selected_emits_link() {
        let mut state = state();
        state.search_key = "redux".into();
        let mut hit = Hit::new("42", "t");
        hit.url = Some("https://example.com".into());
        state.store.merge("redux", vec![hit], 0);

        let (_, actions) = handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(actions, vec![Action::OpenUrl("https://example.com".into())]);
    }

    #[test]
    fn failed_completion_records_error_and_clears_loading() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let request = fetched(&actions).clone();

        handle_event(
            &mut state,
            &Event::SearchCompleted {
                request,
                outcome: Err(FetchFailure::new("HTTP 503")),
            },
        )
        .unwrap();

        assert!(!state.is_loading());
        assert_eq!(state.last_error().map(|f| f.message.as_str()), Some("HTTP 503"));
        assert!(state.store.is_empty());
    }
}
