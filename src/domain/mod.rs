//! Domain layer for the hnsearch plugin.
//!
//! Core types that are independent of Zellij and of the terminal UI.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`hit`]: Search hit model
//!
//! # Examples
//!
//! ```
//! use hnsearch::domain::{Hit, Result};
//!
//! fn first_hit() -> Result<Hit> {
//!     Ok(Hit::new("1", "Hello HN"))
//! }
//! ```

pub mod error;
pub mod hit;

pub use error::{FetchFailure, HnSearchError, Result};
pub use hit::Hit;
