//! Zellij plugin wrapper and entry point.
//!
//! This is the only module that talks to the Zellij host. It translates host
//! events into library events, feeds them to `handle_event`, and carries out
//! the returned actions through host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` and `RunCommands`
//! 3. **Mount**: Once granted, search for the default query
//! 4. **Update**: Map keys and web responses to events
//! 5. **Render**: Call library render function
//!
//! # Web Requests
//!
//! Searches go out through `web_request` with the request encoded in the
//! context map; the host answers with `WebRequestResult` carrying the same
//! map, which is decoded back into the request so its hits land under the
//! right search term.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `/` or `s`: Edit search term
//! - `d` or `x`: Dismiss selected hit
//! - `m`: Load more
//! - `1`-`4`: Sort by title, author, comments, points (again to reverse)
//! - `0`: Back to server order
//! - `Enter`: Open link
//! - `q`/`Esc`: Close plugin
//!
//! While editing:
//! - Characters and `Backspace` edit the term
//! - `Enter`: Search
//! - `Esc`: Stop editing

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use hnsearch::api::{decode_response, trace_context_from, SearchRequest};
use hnsearch::store::SortKey;
use hnsearch::{handle_event, Action, Config, Event, FetchFailure, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the configuration needed to perform
/// host I/O.
struct State {
    /// Core application state from library layer.
    app: hnsearch::AppState,

    /// Search API root.
    api_base: String,

    /// Program used to open links.
    open_command: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: hnsearch::initialize(&default_config),
            api_base: default_config.api_base,
            open_command: default_config.open_command,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests permissions and subscribes to events.
    ///
    /// The first search is deferred until permissions are granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        hnsearch::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            api_base = %config.api_base,
            default_query = %config.default_query,
            hits_per_page = config.hits_per_page,
            "parsed configuration"
        );
        self.app = hnsearch::initialize(&config);
        self.api_base.clone_from(&config.api_base);
        self.open_command.clone_from(&config.open_command);

        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events; returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_response(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    tracing::warn!(
                        exit_code = ?exit_code,
                        stderr = %String::from_utf8_lossy(&stderr),
                        "open command failed"
                    );
                }
                return false;
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => {
                    tracing::debug!("permissions granted - running initial search");
                    Event::Mount
                }
                PermissionStatus::Denied => {
                    tracing::warn!("permissions denied - searches cannot be issued");
                    return false;
                }
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        hnsearch::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Editing => Self::map_editing_key(key),
            InputMode::Normal => Self::map_normal_key(key),
        }
    }

    fn map_editing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Enter => Event::SubmitSearch,
            BareKey::Esc => Event::CancelEdit,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/' | 's') => Event::EditSearch,
            BareKey::Char('d' | 'x') => Event::DismissSelected,
            BareKey::Char('m') => Event::LoadMore,
            BareKey::Char('0') => Event::ClearSort,
            BareKey::Char('1') => Event::Sort(SortKey::Title),
            BareKey::Char('2') => Event::Sort(SortKey::Author),
            BareKey::Char('3') => Event::Sort(SortKey::Comments),
            BareKey::Char('4') => Event::Sort(SortKey::Points),
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Turns a web response into a `SearchCompleted` event.
    ///
    /// Responses to requests this plugin did not issue are ignored.
    fn map_web_response(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(request) = SearchRequest::from_context(context) else {
            tracing::debug!(status, "ignoring web response without search context");
            return None;
        };

        if let Some(trace) = trace_context_from(context) {
            tracing::debug!(
                linked_trace_id = %trace.trace_id,
                linked_span_id = %trace.parent_span_id,
                "response for traced request"
            );
        }

        let outcome = decode_response(status, body).map_err(FetchFailure::from);
        tracing::debug!(
            status,
            body_len = body.len(),
            query = %request.query,
            page = request.page,
            ok = outcome.is_ok(),
            "search response received"
        );

        Some(Event::SearchCompleted { request, outcome })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchPage(request) => {
                let url = request.url(&self.api_base);
                tracing::debug!(url = %url, "issuing search request");
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], request.to_context());
            }
            Action::OpenUrl(url) => {
                tracing::debug!(url = %url, command = %self.open_command, "opening link");
                run_command(&[self.open_command.as_str(), url.as_str()], BTreeMap::new());
            }
        }
    }
}
