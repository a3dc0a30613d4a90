//! The production [`TreeView`]: applies toggle effects to the live page.
//!
//! Hiding physically relocates the row into the holding area; the row's
//! origin list is remembered per path so unhiding returns it to its own
//! subtree. If the host page re-rendered and detached that origin, the row
//! falls back to the tree root — the next resync and directory recompute
//! keep derived state correct either way.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::Element;

use crate::config::HOLDING_AREA_ID;
use crate::core::TreeView;
use crate::dom::{binder, locator::TreeLocator, rows};
use crate::utils::dom;

pub struct DomTreeView {
    locator: Rc<RefCell<TreeLocator>>,
    /// Original parent list of each relocated row, keyed by path.
    origins: RefCell<HashMap<String, Element>>,
}

impl DomTreeView {
    pub fn new(locator: Rc<RefCell<TreeLocator>>) -> Self {
        Self {
            locator,
            origins: RefCell::new(HashMap::new()),
        }
    }

    fn tree(&self) -> Option<Element> {
        self.locator.borrow_mut().locate(false)
    }

    /// Locate the row for a path, in the main tree or the holding area.
    fn find_row(&self, path: &str) -> Option<Element> {
        if let Some(tree) = self.tree() {
            for row in rows::file_rows_in(&tree) {
                if row.path == path {
                    return Some(row.element);
                }
            }
        }
        let document = dom::document()?;
        let holding = document.get_element_by_id(HOLDING_AREA_ID)?;
        rows::file_rows_in(&holding)
            .into_iter()
            .find(|row| row.path == path)
            .map(|row| row.element)
    }

    fn in_holding(row: &Element) -> bool {
        row.closest(&format!("#{}", HOLDING_AREA_ID))
            .ok()
            .flatten()
            .is_some()
    }
}

impl TreeView for DomTreeView {
    fn set_control_hidden_state(&self, path: &str, hidden: bool) {
        if let Some(row) = self.find_row(path) {
            rows::set_control_state(&row, hidden);
        }
    }

    fn relocate_to_holding(&self, path: &str) {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(tree) = self.tree() else { return };
        let Some(row) = self.find_row(path) else {
            return;
        };
        if Self::in_holding(&row) {
            return;
        }
        if let Some(parent) = row.parent_element() {
            self.origins.borrow_mut().insert(path.to_string(), parent);
        }
        if let Some(holding) = rows::ensure_holding_area(&document, &tree) {
            let _ = holding.append_child(&row);
        }
        rows::refresh_holding_visibility(&document);
    }

    fn restore_to_tree(&self, path: &str) {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(tree) = self.tree() else { return };
        let Some(row) = self.find_row(path) else {
            return;
        };
        let target = self
            .origins
            .borrow_mut()
            .remove(path)
            .filter(|origin| origin.is_connected())
            .unwrap_or_else(|| tree.clone());
        rows::insert_sorted(&target, &row, path);
        rows::refresh_holding_visibility(&document);
    }

    fn set_diff_visible(&self, path: &str, visible: bool) {
        let Some(document) = dom::document() else {
            return;
        };
        if let Some(row) = self.find_row(path)
            && let Some(binding) = binder::bind(&document, &row)
        {
            binder::set_visible(&binding, visible);
        }
    }

    fn set_directory_hidden(&self, dir: &str, hidden: bool) {
        let Some(tree) = self.tree() else { return };
        for row in rows::directory_rows_in(&tree) {
            if row.path == dir {
                dom::set_display(&row.element, !hidden);
                return;
            }
        }
    }
}
