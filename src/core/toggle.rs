//! The hide/unhide state machine.
//!
//! [`ToggleController`] is the only writer of [`VisibilityModel`]. A toggle
//! runs as one synchronous transaction: model transition, row control label,
//! row placement, diff-panel visibility, directory recompute. The model's
//! no-change fast path absorbs duplicate events (a direct and a delegated
//! listener both firing for one click), and an in-flight set rejects
//! re-entrant toggles for the same path.
//!
//! All DOM effects go through the [`TreeView`] seam so the transaction logic
//! is testable with a recording fake.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use crate::core::error::ToggleError;
use crate::core::visibility::{DirectoryIndex, VisibilityModel};

/// The three loosely-coupled views a toggle must keep consistent: the row's
/// control affordance, the row's placement (tree vs. holding area), the diff
/// panel, and the derived directory rows.
pub trait TreeView {
    /// Flip the row's button between hide/unhide presentation.
    fn set_control_hidden_state(&self, path: &str, hidden: bool);
    /// Move the row into the hidden-files holding area. Idempotent.
    fn relocate_to_holding(&self, path: &str);
    /// Reinsert the row into the main tree among its siblings, ascending by
    /// path so repeated hide/unhide cycles land in the same position.
    fn restore_to_tree(&self, path: &str);
    /// Show or hide the diff panel bound to the row, if one is rendered.
    fn set_diff_visible(&self, path: &str, visible: bool);
    /// Apply derived visibility to a directory row.
    fn set_directory_hidden(&self, dir: &str, hidden: bool);
}

/// Coordinates the model and the views. Interior-mutable because it is shared
/// between the click handler, the observer resync, and the restore timer, all
/// on the single browser thread.
pub struct ToggleController<V: TreeView> {
    model: RefCell<VisibilityModel>,
    dirs: RefCell<DirectoryIndex>,
    view: V,
    in_flight: RefCell<BTreeSet<String>>,
    bulk_running: Cell<bool>,
}

impl<V: TreeView> ToggleController<V> {
    pub fn new(view: V) -> Self {
        Self {
            model: RefCell::new(VisibilityModel::new()),
            dirs: RefCell::new(DirectoryIndex::new()),
            view,
            in_flight: RefCell::new(BTreeSet::new()),
            bulk_running: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_hidden(&self, path: &str) -> bool {
        self.model.borrow().is_hidden(path)
    }

    /// Hidden paths with a rendered row, ascending.
    pub fn hidden_paths(&self) -> Vec<String> {
        self.model.borrow().hidden_paths()
    }

    /// All known paths, ascending. The share-token index space.
    pub fn known_paths(&self) -> Vec<String> {
        self.model.borrow().known_paths()
    }

    /// Record the currently-rendered file and directory paths, then re-assert
    /// view state for every hidden row and recompute directories once.
    ///
    /// Called on every observer resync: rows the host page re-rendered into
    /// the main tree get pulled back into the holding area, and rows that
    /// vanished are forgotten without losing their hidden mark.
    pub fn observe_tree(&self, files: Vec<String>, dirs: Vec<String>) {
        self.model.borrow_mut().observe(files);
        self.dirs.borrow_mut().observe(dirs);
        for path in self.hidden_paths() {
            self.view.set_control_hidden_state(&path, true);
            self.view.relocate_to_holding(&path);
            self.view.set_diff_visible(&path, false);
        }
        self.apply_directories();
    }

    /// Toggle one file. Returns `Ok(true)` when a transition happened,
    /// `Ok(false)` for a no-op (already in the requested state, or a
    /// re-entrant duplicate for the same path).
    pub fn toggle(&self, path: &str, hidden: bool) -> Result<bool, ToggleError> {
        if !self.in_flight.borrow_mut().insert(path.to_string()) {
            // A toggle for this path is already mid-transition.
            return Ok(false);
        }
        let result = self.toggle_inner(path, hidden, true);
        self.in_flight.borrow_mut().remove(path);
        result
    }

    /// Unhide every hidden file, recomputing directories once at the end.
    /// Returns the number of files shown; 0 if a bulk run is already active.
    pub fn show_all(&self) -> usize {
        if self.bulk_running.replace(true) {
            return 0;
        }
        let mut shown = 0;
        for path in self.hidden_paths() {
            if matches!(self.toggle_inner(&path, false, false), Ok(true)) {
                shown += 1;
            }
        }
        self.apply_directories();
        self.bulk_running.set(false);
        shown
    }

    fn toggle_inner(
        &self,
        path: &str,
        hidden: bool,
        recompute: bool,
    ) -> Result<bool, ToggleError> {
        if !self.model.borrow().is_known(path) {
            return Err(ToggleError::UnknownPath(path.to_string()));
        }
        if !self.model.borrow_mut().set_hidden(path, hidden) {
            return Ok(false);
        }
        self.view.set_control_hidden_state(path, hidden);
        if hidden {
            self.view.relocate_to_holding(path);
        } else {
            self.view.restore_to_tree(path);
        }
        self.view.set_diff_visible(path, !hidden);
        if recompute {
            self.apply_directories();
        }
        Ok(true)
    }

    fn apply_directories(&self) {
        let model = self.model.borrow();
        let dirs = self.dirs.borrow();
        let hidden = dirs.hidden_dirs(&model);
        for dir in dirs.iter() {
            self.view.set_directory_hidden(dir, hidden.contains(dir));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every view effect so tests can assert on exact side effects.
    #[derive(Default)]
    struct RecordingView {
        log: RefCell<Vec<String>>,
        dir_state: RefCell<std::collections::BTreeMap<String, bool>>,
    }

    impl RecordingView {
        fn log_of(&self, op: &str) -> Vec<String> {
            self.log
                .borrow()
                .iter()
                .filter(|line| line.starts_with(op))
                .cloned()
                .collect()
        }
    }

    impl TreeView for RecordingView {
        fn set_control_hidden_state(&self, path: &str, hidden: bool) {
            self.log.borrow_mut().push(format!("control {} {}", path, hidden));
        }
        fn relocate_to_holding(&self, path: &str) {
            self.log.borrow_mut().push(format!("relocate {}", path));
        }
        fn restore_to_tree(&self, path: &str) {
            self.log.borrow_mut().push(format!("restore {}", path));
        }
        fn set_diff_visible(&self, path: &str, visible: bool) {
            self.log.borrow_mut().push(format!("diff {} {}", path, visible));
        }
        fn set_directory_hidden(&self, dir: &str, hidden: bool) {
            self.dir_state.borrow_mut().insert(dir.to_string(), hidden);
        }
    }

    fn controller_with(
        files: &[&str],
        dirs: &[&str],
    ) -> ToggleController<RecordingView> {
        let controller = ToggleController::new(RecordingView::default());
        controller.observe_tree(
            files.iter().map(|s| s.to_string()).collect(),
            dirs.iter().map(|s| s.to_string()).collect(),
        );
        controller.view().log.borrow_mut().clear();
        controller
    }

    #[test]
    fn test_hide_then_unhide_round_trips() {
        let controller = controller_with(&["a.txt", "b/c.txt"], &["b"]);

        assert_eq!(controller.toggle("b/c.txt", true), Ok(true));
        assert!(controller.is_hidden("b/c.txt"));
        assert_eq!(controller.toggle("b/c.txt", false), Ok(true));
        assert!(!controller.is_hidden("b/c.txt"));

        let view = controller.view();
        assert_eq!(view.log_of("relocate"), vec!["relocate b/c.txt"]);
        assert_eq!(view.log_of("restore"), vec!["restore b/c.txt"]);
        assert_eq!(
            view.log_of("diff"),
            vec!["diff b/c.txt false", "diff b/c.txt true"]
        );
    }

    #[test]
    fn test_duplicate_toggle_has_no_side_effects() {
        let controller = controller_with(&["a.txt"], &[]);

        assert_eq!(controller.toggle("a.txt", true), Ok(true));
        let effects_after_first = controller.view().log.borrow().len();

        // Same target state again: the model reports no change and the diff
        // panel must not be touched a second time.
        assert_eq!(controller.toggle("a.txt", true), Ok(false));
        assert_eq!(controller.view().log.borrow().len(), effects_after_first);
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let controller = controller_with(&["a.txt"], &[]);
        assert_eq!(
            controller.toggle("nope.txt", true),
            Err(ToggleError::UnknownPath("nope.txt".to_string()))
        );
        assert!(controller.view().log.borrow().is_empty());
    }

    #[test]
    fn test_directory_collapses_and_reopens() {
        // The canonical scenario: a.txt, b/c.txt, b/d.txt.
        let controller = controller_with(&["a.txt", "b/c.txt", "b/d.txt"], &["b"]);

        controller.toggle("b/c.txt", true).unwrap();
        controller.toggle("b/d.txt", true).unwrap();
        assert_eq!(controller.view().dir_state.borrow().get("b"), Some(&true));
        assert!(!controller.is_hidden("a.txt"));

        controller.toggle("b/c.txt", false).unwrap();
        assert_eq!(controller.view().dir_state.borrow().get("b"), Some(&false));
    }

    #[test]
    fn test_show_all_clears_everything() {
        let controller = controller_with(
            &["a.txt", "b/c.txt", "b/d.txt", "e/f.txt", "g.txt"],
            &["b", "e"],
        );
        for path in ["a.txt", "b/c.txt", "b/d.txt", "e/f.txt", "g.txt"] {
            controller.toggle(path, true).unwrap();
        }
        assert_eq!(controller.hidden_paths().len(), 5);

        assert_eq!(controller.show_all(), 5);
        assert!(controller.hidden_paths().is_empty());
        assert!(controller.view().dir_state.borrow().values().all(|h| !h));
    }

    #[test]
    fn test_show_all_on_clean_tree_is_a_noop() {
        let controller = controller_with(&["a.txt"], &[]);
        assert_eq!(controller.show_all(), 0);
    }

    #[test]
    fn test_observe_tree_reasserts_hidden_rows() {
        let controller = controller_with(&["a.txt", "b.txt"], &[]);
        controller.toggle("b.txt", true).unwrap();
        controller.view().log.borrow_mut().clear();

        // Host re-render: both rows back in the main tree.
        controller.observe_tree(
            vec!["a.txt".to_string(), "b.txt".to_string()],
            Vec::new(),
        );
        let view = controller.view();
        assert_eq!(view.log_of("relocate"), vec!["relocate b.txt"]);
        assert_eq!(view.log_of("diff"), vec!["diff b.txt false"]);
    }
}
