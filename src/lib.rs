//! hnsearch: a Zellij plugin for searching Hacker News.
//!
//! The plugin queries the Hacker News search API (hn.algolia.com) and shows
//! the hits in a sortable table:
//! - Results are cached per search term and extended page by page
//! - Columns sort by title, author, comments or points, with reverse toggling
//! - Rows can be dismissed from the current result set
//! - The selected hit opens in the browser

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, host I/O
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Result Store  │   │ API Layer     │
//! │ (ui/)         │   │ (store/)      │   │ (api/)        │
//! │ - Rendering   │   │ - Per-term    │   │ - Request URL │
//! │ - Theming     │   │   cache       │   │ - Context map │
//! │ - Components  │   │ - Sorting     │   │ - Decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Hit model, error types (domain/)                 │
//! │  - Data directory (infrastructure/)                 │
//! │  - OpenTelemetry tracing (observability/)           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/hnsearch.wasm" {
//!         default_query "redux"
//!         hits_per_page "100"
//!         open_command "xdg-open"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use hnsearch::{Action, Config, Event, handle_event, initialize};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(matches!(&actions[0], Action::FetchPage(req) if req.query == "redux"));
//! # Ok::<(), hnsearch::HnSearchError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod store;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{FetchFailure, Hit, HnSearchError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default search API root.
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";

/// Term searched when the plugin opens.
pub const DEFAULT_QUERY: &str = "redux";

/// Page size requested from the API.
pub const DEFAULT_HITS_PER_PAGE: u32 = 100;

/// Largest page size the API accepts.
const MAX_HITS_PER_PAGE: u32 = 1000;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search API root, without a trailing slash.
    pub api_base: String,

    /// Term searched on startup.
    pub default_query: String,

    /// Page size, 1 to 1000.
    pub hits_per_page: u32,

    /// Program that opens a hit's link; receives the URL as its only argument.
    pub open_command: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing level filter. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            hits_per_page: DEFAULT_HITS_PER_PAGE,
            open_command: "xdg-open".to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing or invalid values fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use hnsearch::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base".to_string(), "http://localhost:8080/".to_string());
    /// map.insert("hits_per_page".to_string(), "20".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base, "http://localhost:8080");
    /// assert_eq!(config.hits_per_page, 20);
    /// assert_eq!(config.default_query, "redux");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let api_base = non_empty("api_base")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let hits_per_page = match config.get("hits_per_page") {
            None => defaults.hits_per_page,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if (1..=MAX_HITS_PER_PAGE).contains(&n) => n,
                _ => {
                    tracing::debug!(value = %raw, "invalid hits_per_page, using default");
                    defaults.hits_per_page
                }
            },
        };

        Self {
            api_base,
            // Kept verbatim: leading spaces are part of the query.
            default_query: config.get("default_query").cloned().unwrap_or(defaults.default_query),
            hits_per_page,
            open_command: non_empty("open_command").unwrap_or(defaults.open_command),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }
}

/// Creates the application state for a configuration.
///
/// The theme is resolved from `theme_file` (`~` maps to the host home), then
/// `theme_name`, then the default; load failures are logged and fall back to
/// the default. The search input starts out holding `default_query`, ready
/// for [`Event::Mount`].
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing hnsearch plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme, config.hits_per_page);
    state.set_search_term(config.default_query.as_str());
    state
}
