//! Resolving a file row to its diff panel.
//!
//! The row's primary link carries a fragment identifier naming the panel
//! element. Not every file has a realized panel (large, binary, or collapsed
//! diffs); absence is a valid state, not an error. When a `.file` wrapper
//! exists around the panel, visibility is applied to the wrapper so the
//! panel's chrome hides as a unit.

use web_sys::{Document, Element};

use crate::config::{DIFF_CONTAINER_QUERY, DIFF_ID_PREFIX, ROW_ANCHOR_QUERY};
use crate::utils::dom;

/// The diff-panel element id referenced by a row, if its link carries one.
pub fn diff_anchor_id(row: &Element) -> Option<String> {
    let anchor = row.query_selector(ROW_ANCHOR_QUERY).ok()??;
    let href = anchor.get_attribute("href")?;
    let id = href.strip_prefix('#')?;
    if id.starts_with(DIFF_ID_PREFIX) {
        Some(id.to_string())
    } else {
        None
    }
}

/// Resolve the element visibility should be applied to for a row's diff:
/// the wrapping container when present, the panel itself otherwise.
pub fn bind(document: &Document, row: &Element) -> Option<Element> {
    let id = diff_anchor_id(row)?;
    let panel = document.get_element_by_id(&id)?;
    match panel.closest(DIFF_CONTAINER_QUERY) {
        Ok(Some(container)) => Some(container),
        _ => Some(panel),
    }
}

/// Show or hide a bound diff element.
pub fn set_visible(binding: &Element, show: bool) {
    dom::set_display(binding, show);
}
