//! Browser layer: everything that reads or mutates the host page.
//!
//! - [`locator`] - find and cache the file-list root
//! - [`rows`] - file/directory row parsing and injected controls
//! - [`binder`] - file row to diff-panel resolution
//! - [`view`] - the production [`TreeView`](crate::core::TreeView) over the page
//! - [`observer`] - debounced mutation observation of the tree

pub mod binder;
pub mod locator;
pub mod observer;
pub mod rows;
pub mod view;
