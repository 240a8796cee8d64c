//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` that the
//! plugin shim executes in order: issuing web requests through the Zellij
//! host, launching the link opener, or hiding the plugin pane.
//!
//! # Example
//!
//! ```rust
//! use hnsearch::app::Action;
//! use hnsearch::api::SearchRequest;
//!
//! let actions = vec![
//!     Action::FetchPage(SearchRequest::new("redux", 0, 100)),
//! ];
//! ```

use crate::api::SearchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues a search request through the host.
    ///
    /// The response comes back later as a `SearchCompleted` event carrying
    /// the same request.
    FetchPage(SearchRequest),

    /// Opens a link with the configured opener command.
    OpenUrl(String),
}
