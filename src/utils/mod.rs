//! Browser utility modules.
//!
//! - [`dom`] - safe accessors for window/document/storage and URL-hash helpers
//! - [`cache`] - sessionStorage-backed JSON snapshots

pub mod cache;
pub mod dom;
