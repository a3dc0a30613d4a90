//! The authoritative per-file hidden/shown state and the derived per-directory
//! visibility.
//!
//! [`VisibilityModel`] keys everything by repository-relative path, the one
//! identity that survives host-page re-renders. The hidden set is the single
//! source of truth for everything shareable; the known set tracks which paths
//! currently have a rendered row.
//!
//! [`DirectoryIndex`] derives directory visibility: a directory is hidden
//! exactly when it has no visible descendant file (a directory with no files
//! at all counts as hidden).

use std::collections::BTreeSet;

/// Hidden/shown state for every file in the tree.
#[derive(Debug, Default)]
pub struct VisibilityModel {
    /// Paths with a currently-rendered row (main tree or holding area).
    known: BTreeSet<String>,
    /// Paths marked hidden. Survives rows disappearing and reappearing, so a
    /// re-rendered row regains its prior state instead of resetting to shown.
    hidden: BTreeSet<String>,
}

impl VisibilityModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the known-path set with the currently-rendered paths. The
    /// hidden set is deliberately left untouched.
    pub fn observe(&mut self, paths: impl IntoIterator<Item = String>) {
        self.known = paths.into_iter().collect();
    }

    pub fn is_known(&self, path: &str) -> bool {
        self.known.contains(path)
    }

    /// Set a path's hidden state. Idempotent: returns `true` only when a
    /// transition actually occurred, which is what downstream consumers use
    /// to skip redundant re-renders and duplicate click events.
    pub fn set_hidden(&mut self, path: &str, hidden: bool) -> bool {
        if hidden {
            self.hidden.insert(path.to_string())
        } else {
            self.hidden.remove(path)
        }
    }

    pub fn is_hidden(&self, path: &str) -> bool {
        self.hidden.contains(path)
    }

    /// Hidden paths that currently have a rendered row, ascending.
    pub fn hidden_paths(&self) -> Vec<String> {
        self.known
            .iter()
            .filter(|p| self.hidden.contains(*p))
            .cloned()
            .collect()
    }

    /// All known paths in ascending lexicographic order. This ordering is the
    /// share-token index space and the unhide reinsertion order.
    pub fn known_paths(&self) -> Vec<String> {
        self.known.iter().cloned().collect()
    }
}

/// The set of directory paths in the tree, with derived visibility.
#[derive(Debug, Default)]
pub struct DirectoryIndex {
    dirs: BTreeSet<String>,
}

impl DirectoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the directory set with the currently-rendered directory paths.
    pub fn observe(&mut self, dirs: impl IntoIterator<Item = String>) {
        self.dirs = dirs.into_iter().collect();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    /// Compute the set of hidden directories for the current model state.
    ///
    /// Every directory starts presumed hidden; walking the visible files and
    /// marking each ancestor reachable clears exactly the directories with a
    /// visible descendant, so one pass is linear in files times depth.
    pub fn hidden_dirs(&self, model: &VisibilityModel) -> BTreeSet<String> {
        let mut visible: BTreeSet<&str> = BTreeSet::new();
        for path in model.known.iter() {
            if model.is_hidden(path) {
                continue;
            }
            let mut prefix = path.as_str();
            while let Some(cut) = prefix.rfind('/') {
                prefix = &prefix[..cut];
                if !visible.insert(prefix) {
                    // Ancestors of an already-marked directory are marked too.
                    break;
                }
            }
        }
        self.dirs
            .iter()
            .filter(|d| !visible.contains(d.as_str()))
            .cloned()
            .collect()
    }
}
