//! File and directory rows: parsing, injected controls, and placement.
//!
//! Rows belong to the host page; this module only reads their path text and
//! appends our own elements (toggle buttons, the holding area, the action
//! bar). Every `ensure_*` function is idempotent so the observer resync can
//! call them on every pass.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::{
    ACTIONS_BAR_ID, CONTROL_ATTACHED_ATTR, CONTROL_BASE_CLASSES, CONTROL_PATH_ATTR,
    DIRECTORY_ROW_QUERY, FILE_ROW_QUERY, HIDE_CLASS, HOLDING_AREA_ID, HOLDING_LABEL_ID,
    PATH_TEXT_QUERY, ROW_LABEL_QUERY, SHARE_ID, SHOW_ALL_ID, UNHIDE_CLASS, labels,
};
use crate::utils::dom;

/// One file row and its extracted path.
pub struct FileRow {
    pub path: String,
    pub element: Element,
}

/// Extract the repository-relative path from a row.
pub fn row_path(row: &Element) -> Option<String> {
    let span = row.query_selector(PATH_TEXT_QUERY).ok()??;
    let text = span.text_content()?;
    let path = text.trim();
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

/// All file rows under `scope` with a usable path.
pub fn file_rows_in(scope: &Element) -> Vec<FileRow> {
    rows_matching(scope, FILE_ROW_QUERY)
}

/// All directory rows under `scope` with a usable path.
pub fn directory_rows_in(scope: &Element) -> Vec<FileRow> {
    rows_matching(scope, DIRECTORY_ROW_QUERY)
}

fn rows_matching(scope: &Element, query: &str) -> Vec<FileRow> {
    let mut rows = Vec::new();
    let Ok(nodes) = scope.query_selector_all(query) else {
        return rows;
    };
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i)
            && let Ok(element) = node.dyn_into::<Element>()
            && let Some(path) = row_path(&element)
        {
            rows.push(FileRow { path, element });
        }
    }
    rows
}

/// Attach a toggle button to a row that doesn't have one yet. Rows are
/// marked with an attribute so repeated passes skip them.
pub fn ensure_control(document: &Document, row: &Element) {
    if row.has_attribute(CONTROL_ATTACHED_ATTR) {
        return;
    }
    let _ = row.set_attribute(CONTROL_ATTACHED_ATTR, "1");
    let Some(path) = row_path(row) else { return };
    let Ok(button) = document.create_element("button") else {
        return;
    };
    let _ = button.set_attribute("type", "button");
    let _ = button.set_attribute("class", &format!("{} {}", CONTROL_BASE_CLASSES, HIDE_CLASS));
    let _ = button.set_attribute(CONTROL_PATH_ATTR, &path);
    button.set_text_content(Some(labels::HIDE));
    if let Some(html) = button.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("margin-left", "8px");
    }

    // Next to the row label when present, at the row end otherwise.
    let anchor_parent = row
        .query_selector(ROW_LABEL_QUERY)
        .ok()
        .flatten()
        .and_then(|label| label.parent_element());
    match anchor_parent {
        Some(parent) => {
            let _ = parent.append_child(&button);
        }
        None => {
            let _ = row.append_child(&button);
        }
    }
}

/// Flip a row's toggle button between hide and unhide presentation.
pub fn set_control_state(row: &Element, hidden: bool) {
    let Ok(Some(button)) =
        row.query_selector(&format!(".{}, .{}", HIDE_CLASS, UNHIDE_CLASS))
    else {
        return;
    };
    let classes = button.class_list();
    if hidden {
        button.set_text_content(Some(labels::UNHIDE));
        let _ = classes.add_1(UNHIDE_CLASS);
        let _ = classes.remove_1(HIDE_CLASS);
    } else {
        button.set_text_content(Some(labels::HIDE));
        let _ = classes.add_1(HIDE_CLASS);
        let _ = classes.remove_1(UNHIDE_CLASS);
    }
}

/// The holding area for hidden rows, created on first use as a sibling of
/// the tree. Starts hidden; visibility follows its row count.
pub fn ensure_holding_area(document: &Document, tree: &Element) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id(HOLDING_AREA_ID) {
        return Some(existing);
    }
    let parent = tree.parent_element()?;

    let label = document.create_element("div").ok()?;
    label.set_id(HOLDING_LABEL_ID);
    label.set_text_content(Some(labels::HOLDING));
    if let Some(html) = label.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("font-weight", "bold");
        let _ = style.set_property("font-size", "13px");
        let _ = style.set_property("margin", "20px 0 4px 8px");
    }

    let container = document.create_element("ul").ok()?;
    container.set_id(HOLDING_AREA_ID);
    let _ = container.set_attribute("class", "ActionList ActionList--tree ActionList--full");
    if let Some(html) = container.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("border-top", "1px solid #eee");
    }

    let _ = parent.append_child(&label);
    let _ = parent.append_child(&container);
    refresh_holding_visibility(document);
    Some(container)
}

/// Show the holding area and its heading only while it contains rows.
pub fn refresh_holding_visibility(document: &Document) {
    let Some(container) = document.get_element_by_id(HOLDING_AREA_ID) else {
        return;
    };
    let visible = container.child_element_count() > 0;
    dom::set_display(&container, visible);
    if let Some(label) = document.get_element_by_id(HOLDING_LABEL_ID) {
        dom::set_display(&label, visible);
    }
}

/// The show-all / share action bar, created once below the tree.
pub fn ensure_actions_bar(document: &Document, tree: &Element) {
    if document.get_element_by_id(ACTIONS_BAR_ID).is_some() {
        return;
    }
    let Some(parent) = tree.parent_element() else {
        return;
    };
    let Ok(bar) = document.create_element("div") else {
        return;
    };
    bar.set_id(ACTIONS_BAR_ID);
    if let Some(html) = bar.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("margin", "8px");
    }
    for (id, label) in [(SHOW_ALL_ID, labels::SHOW_ALL), (SHARE_ID, labels::SHARE)] {
        if let Ok(button) = document.create_element("button") {
            button.set_id(id);
            let _ = button.set_attribute("type", "button");
            let _ = button.set_attribute("class", CONTROL_BASE_CLASSES);
            button.set_text_content(Some(label));
            if let Some(html) = button.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.style().set_property("margin-right", "4px");
            }
            let _ = bar.append_child(&button);
        }
    }
    let _ = parent.append_child(&bar);
}

/// Insert `row` into `parent` keeping file rows in ascending path order, so
/// repeated hide/unhide cycles always land in the same position.
pub fn insert_sorted(parent: &Element, row: &Element, path: &str) {
    let children = parent.children();
    for i in 0..children.length() {
        let Some(sibling) = children.item(i) else {
            continue;
        };
        if dom::same_element(&sibling, row) {
            continue;
        }
        if !sibling.matches(FILE_ROW_QUERY).unwrap_or(false) {
            continue;
        }
        if let Some(sibling_path) = row_path(&sibling)
            && path < sibling_path.as_str()
        {
            let _ = parent.insert_before(row, Some(&sibling));
            return;
        }
    }
    let _ = parent.append_child(row);
}

/// Briefly disable a just-clicked control; re-enabled by the session after
/// the cool-down window.
pub fn set_enabled(control: &Element, enabled: bool) {
    if enabled {
        let _ = control.remove_attribute("disabled");
    } else {
        let _ = control.set_attribute("disabled", "true");
    }
}
