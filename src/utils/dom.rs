//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling. Everything returns `Option` so callers can treat a missing
//! browser environment as "not ready" rather than an error.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

/// Get the full current URL.
pub fn current_href() -> Option<String> {
    window()?.location().href().ok()
}

/// Get the current page pathname.
pub fn current_pathname() -> Option<String> {
    window()?.location().pathname().ok()
}

/// Show or hide an element through its inline display style.
pub fn set_display(element: &Element, visible: bool) {
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        if visible {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }
}

/// Whether two elements are the same DOM node.
pub fn same_element(a: &Element, b: &Element) -> bool {
    let b_node: &Node = b.as_ref();
    a.is_same_node(Some(b_node))
}

/// Log a one-line diagnostic to the devtools console.
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Log a one-line warning to the devtools console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
