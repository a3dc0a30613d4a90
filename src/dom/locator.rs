//! Locating the file-list root.
//!
//! GitHub renders the PR file tree under a handful of structural patterns
//! depending on view and page generation; [`TreeLocator`] tries them in order
//! and caches the first hit. The cache self-invalidates when the element is
//! detached (post-navigation), and `invalidate` drops it explicitly as part
//! of session teardown.

use web_sys::Element;

use crate::config::TREE_QUERIES;
use crate::utils::dom;

#[derive(Default)]
pub struct TreeLocator {
    cached: Option<Element>,
}

impl TreeLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the file-list root. Returns `None` while no known container
    /// exists — the page may still be loading, so callers poll.
    pub fn locate(&mut self, force_refresh: bool) -> Option<Element> {
        if !force_refresh
            && let Some(root) = &self.cached
            && root.is_connected()
        {
            return Some(root.clone());
        }
        self.cached = None;

        let document = dom::document()?;
        for query in TREE_QUERIES {
            if let Ok(Some(root)) = document.query_selector(query) {
                dom::log(&format!("diffhide: file tree located via '{}'", query));
                self.cached = Some(root.clone());
                return Some(root);
            }
        }
        None
    }

    /// Drop the cached root handle.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
