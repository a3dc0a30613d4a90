//! Control roles for the delegated click handler.
//!
//! One listener on `document` inspects the click target and maps it to a
//! role through this table; the session dispatches on the role. Keeping the
//! mapping pure makes the single-listener scheme testable without a DOM.

use crate::config::{HIDE_CLASS, SHARE_ID, SHOW_ALL_ID, UNHIDE_CLASS};

/// Which of the injected controls an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    /// Per-row button in "hide this file" state.
    Hide,
    /// Per-row button in "unhide this file" state.
    Unhide,
    /// The "Show All Hidden Files" button.
    ShowAll,
    /// The "Share Hidden State" button.
    Share,
}

impl ControlRole {
    /// Resolve a role from an element's id and class attribute.
    ///
    /// Returns `None` for anything that is not one of our controls, which is
    /// the overwhelmingly common case for a page-level click listener.
    pub fn from_identity(id: &str, class_attr: &str) -> Option<Self> {
        if id == SHOW_ALL_ID {
            return Some(Self::ShowAll);
        }
        if id == SHARE_ID {
            return Some(Self::Share);
        }
        for class in class_attr.split_whitespace() {
            if class == HIDE_CLASS {
                return Some(Self::Hide);
            }
            if class == UNHIDE_CLASS {
                return Some(Self::Unhide);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_toggle_classes() {
        assert_eq!(
            ControlRole::from_identity("", "btn btn-sm hide-tree-file-button"),
            Some(ControlRole::Hide)
        );
        assert_eq!(
            ControlRole::from_identity("", "btn btn-sm unhide-tree-file-button"),
            Some(ControlRole::Unhide)
        );
    }

    #[test]
    fn test_role_from_ids() {
        assert_eq!(
            ControlRole::from_identity(SHOW_ALL_ID, ""),
            Some(ControlRole::ShowAll)
        );
        assert_eq!(
            ControlRole::from_identity(SHARE_ID, "btn"),
            Some(ControlRole::Share)
        );
    }

    #[test]
    fn test_unrelated_elements_have_no_role() {
        assert_eq!(ControlRole::from_identity("", ""), None);
        assert_eq!(ControlRole::from_identity("some-id", "btn btn-sm"), None);
        // Substrings of our class names must not match.
        assert_eq!(
            ControlRole::from_identity("", "not-a-hide-tree-file-button"),
            None
        );
    }
}
