//! Wire format for the Hacker News search API.
//!
//! The plugin never performs I/O itself. The application layer emits a
//! [`SearchRequest`] inside an action; the plugin shim hands it to the Zellij
//! host as a web request and turns the host's answer back into an event via
//! [`SearchRequest::from_context`] and [`decode_response`].
//!
//! # Modules
//!
//! - `request`: URL building and request context round trip with trace propagation
//! - `response`: Response status handling and JSON decoding

pub mod request;
pub mod response;

pub use request::{trace_context_from, SearchRequest, TraceContext};
pub use response::{decode_response, SearchPage};
