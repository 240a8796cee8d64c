//! End-to-end state machine scenarios driven through `handle_event`, the way
//! the plugin shim drives them: every fetch action is answered by a
//! `SearchCompleted` event carrying the request that was issued.

use hnsearch::api::{decode_response, SearchPage, SearchRequest};
use hnsearch::store::SortKey;
use hnsearch::ui::{MoreButton, TableView};
use hnsearch::{handle_event, initialize, Action, AppState, Config, Event, FetchFailure, Hit};

fn app() -> AppState {
    initialize(&Config::default())
}

fn hits(ids: &[&str]) -> Vec<Hit> {
    ids.iter().map(|id| Hit::new(*id, format!("story {id}"))).collect()
}

fn ids(state: &AppState) -> Vec<String> {
    state.display_hits().iter().map(|h| h.object_id.clone()).collect()
}

/// Runs an event and returns the single request it issued, if any.
fn dispatch(state: &mut AppState, event: Event) -> Option<SearchRequest> {
    let (_, actions) = handle_event(state, &event).expect("handler is infallible");
    let mut requests = actions.into_iter().filter_map(|a| match a {
        Action::FetchPage(request) => Some(request),
        _ => None,
    });
    let request = requests.next();
    assert!(requests.next().is_none(), "at most one fetch per event");
    request
}

fn respond(state: &mut AppState, request: SearchRequest, hits: Vec<Hit>) {
    let page = request.page;
    dispatch(
        state,
        Event::SearchCompleted {
            request,
            outcome: Ok(SearchPage { hits, page: Some(page) }),
        },
    );
}

fn search(state: &mut AppState, term: &str) -> Option<SearchRequest> {
    dispatch(state, Event::SearchChange(term.to_string()));
    dispatch(state, Event::SubmitSearch)
}

#[test]
fn first_search_loads_then_stores_page_zero() {
    let mut state = app();
    assert!(!state.is_loading());

    let request = search(&mut state, "redux").expect("uncached term fetches");
    assert_eq!(request, SearchRequest::new("redux", 0, 100));
    assert!(state.is_loading());

    respond(&mut state, request, hits(&["a", "b"]));

    assert!(!state.is_loading());
    assert_eq!(state.last_error(), None);
    assert_eq!(ids(&state), vec!["a", "b"]);
    assert_eq!(state.current_page(), 0);
}

#[test]
fn resubmitting_cached_term_skips_fetch() {
    let mut state = app();
    let request = search(&mut state, "redux").unwrap();
    respond(&mut state, request, hits(&["a", "b"]));

    let vue = search(&mut state, "vue").unwrap();
    respond(&mut state, vue, hits(&["v"]));
    assert_eq!(ids(&state), vec!["v"]);

    assert_eq!(search(&mut state, "redux"), None);
    assert!(!state.is_loading());
    assert_eq!(ids(&state), vec!["a", "b"]);
}

#[test]
fn dismiss_leaves_only_other_hits() {
    let mut state = app();
    let request = search(&mut state, "redux").unwrap();
    respond(&mut state, request, hits(&["y", "z"]));

    dispatch(&mut state, Event::Dismiss("y".to_string()));
    assert_eq!(ids(&state), vec!["z"]);

    dispatch(&mut state, Event::Dismiss("y".to_string()));
    assert_eq!(ids(&state), vec!["z"]);
}

#[test]
fn load_more_appends_next_page() {
    let mut state = app();
    let request = search(&mut state, "redux").unwrap();
    respond(&mut state, request, hits(&["h0a", "h0b"]));

    let more = dispatch(&mut state, Event::LoadMore).expect("load more fetches");
    assert_eq!(more, SearchRequest::new("redux", 1, 100));
    respond(&mut state, more, hits(&["h1a"]));

    assert_eq!(ids(&state), vec!["h0a", "h0b", "h1a"]);
    assert_eq!(state.current_page(), 1);
    assert_eq!(
        state.compute_viewmodel(40, 120).more,
        MoreButton::Ready { next_page: 2 }
    );
}

#[test]
fn load_more_without_page_in_body_keeps_page_moving_forward() {
    let mut state = app();
    let first = dispatch(&mut state, Event::Mount).unwrap();
    let body = decode_response(200, br#"{"hits":[{"objectID":"a"}],"page":0}"#).unwrap();
    dispatch(&mut state, Event::SearchCompleted { request: first, outcome: Ok(body) });

    let more = dispatch(&mut state, Event::LoadMore).unwrap();
    assert_eq!(more.page, 1);
    let body = decode_response(200, br#"{"hits":[{"objectID":"b"}]}"#).unwrap();
    dispatch(&mut state, Event::SearchCompleted { request: more, outcome: Ok(body) });

    assert_eq!(state.current_page(), 1);
    assert_eq!(ids(&state), vec!["a", "b"]);
    let next = dispatch(&mut state, Event::LoadMore).unwrap();
    assert_eq!(next.page, 2);
}

#[test]
fn failed_fetch_sets_error_and_keeps_store() {
    let mut state = app();
    let request = search(&mut state, "redux").unwrap();
    dispatch(
        &mut state,
        Event::SearchCompleted {
            request,
            outcome: Err(FetchFailure::new("connection refused")),
        },
    );

    assert!(!state.is_loading());
    assert!(state.last_error().is_some());
    assert!(ids(&state).is_empty());
}

#[test]
fn failed_load_more_hides_cached_table_until_next_success() {
    let mut state = app();
    let request = search(&mut state, "redux").unwrap();
    respond(&mut state, request, hits(&["a"]));

    let more = dispatch(&mut state, Event::LoadMore).unwrap();
    dispatch(
        &mut state,
        Event::SearchCompleted {
            request: more,
            outcome: Err(FetchFailure::new("HTTP 500")),
        },
    );

    assert_eq!(ids(&state), vec!["a"]);
    let vm = state.compute_viewmodel(40, 120);
    assert!(matches!(vm.body, TableView::Failed(ref n) if n.message == "Something went wrong."));
    assert_eq!(vm.more, MoreButton::Ready { next_page: 1 });

    let retry = dispatch(&mut state, Event::LoadMore).unwrap();
    respond(&mut state, retry, hits(&["b"]));
    assert_eq!(state.last_error(), None);
    assert!(matches!(state.compute_viewmodel(40, 120).body, TableView::Ready { .. }));
}

#[test]
fn stale_response_merges_under_its_own_term() {
    let mut state = app();
    let redux = search(&mut state, "redux").unwrap();
    let vue = search(&mut state, "vue").unwrap();

    respond(&mut state, redux, hits(&["r1"]));
    assert!(ids(&state).is_empty(), "active term is still vue");

    respond(&mut state, vue, hits(&["v1"]));
    assert_eq!(ids(&state), vec!["v1"]);

    assert_eq!(search(&mut state, "redux"), None);
    assert_eq!(ids(&state), vec!["r1"]);
}

#[test]
fn mount_refetches_default_query() {
    let mut state = app();
    let first = dispatch(&mut state, Event::Mount).unwrap();
    assert_eq!(first.query, "redux");
    respond(&mut state, first, hits(&["a"]));

    let again = dispatch(&mut state, Event::Mount).unwrap();
    assert_eq!(again, SearchRequest::new("redux", 0, 100));
    respond(&mut state, again, hits(&["b"]));
    assert_eq!(ids(&state), vec!["a", "b"]);
    assert_eq!(state.current_page(), 0);
}

#[test]
fn sort_toggle_cycles_direction() {
    let mut state = app();
    let request = search(&mut state, "redux").unwrap();
    let mut batch = hits(&["low", "mid", "high"]);
    for (hit, points) in batch.iter_mut().zip([1, 5, 9]) {
        hit.points = points;
    }
    respond(&mut state, request, batch);

    dispatch(&mut state, Event::Sort(SortKey::Points));
    assert_eq!(ids(&state), vec!["high", "mid", "low"]);

    dispatch(&mut state, Event::Sort(SortKey::Points));
    assert_eq!(ids(&state), vec!["low", "mid", "high"]);

    dispatch(&mut state, Event::Sort(SortKey::Points));
    assert_eq!(ids(&state), vec!["high", "mid", "low"]);

    dispatch(&mut state, Event::Sort(SortKey::None));
    assert_eq!(ids(&state), vec!["low", "mid", "high"]);
}

#[test]
fn clearing_sort_twice_stays_in_arrival_order() {
    let mut state = app();
    let request = search(&mut state, "redux").unwrap();
    respond(&mut state, request, hits(&["c", "a", "b"]));
    dispatch(&mut state, Event::Sort(SortKey::Title));
    assert_eq!(ids(&state), vec!["a", "b", "c"]);

    dispatch(&mut state, Event::ClearSort);
    assert_eq!(ids(&state), vec!["c", "a", "b"]);
    dispatch(&mut state, Event::ClearSort);
    assert_eq!(ids(&state), vec!["c", "a", "b"]);
    assert!(state.compute_viewmodel(40, 120).columns.iter().all(|c| c.direction.is_none()));
}

#[test]
fn empty_term_search_shows_no_results_with_counts() {
    let mut state = app();
    let request = search(&mut state, "").expect("empty term is fetched like any other");
    assert_eq!(request.query, "");
    respond(&mut state, request, vec![]);

    let vm = state.compute_viewmodel(40, 120);
    assert!(matches!(vm.body, TableView::Empty(ref e) if e.message.starts_with("No results")));
    assert!(vm.header.title.contains("0 hits"));
}
