//! Application configuration.
//!
//! Centralizes the host-page DOM contract (selectors, attribute names) and
//! every tunable constant. The selectors describe GitHub's markup and are the
//! only place that knowledge lives; everything else in the crate works in
//! terms of paths and roles.

// =============================================================================
// Host Page Contract — containers
// =============================================================================

/// Ordered structural queries for the file-list root. The first match wins:
/// the current PR file tree, then the ARIA-labelled variant, then the
/// commit-view bucket.
pub const TREE_QUERIES: &[&str] = &[
    "file-tree nav ul.ActionList",
    "nav[aria-label='File Tree'] ul.ActionList",
    "#files_bucket file-tree ul.ActionList",
];

// =============================================================================
// Host Page Contract — rows
// =============================================================================

/// A file row in the tree.
pub const FILE_ROW_QUERY: &str = "li.js-tree-node[data-tree-entry-type='file']";

/// A directory row in the tree.
pub const DIRECTORY_ROW_QUERY: &str = "li.js-tree-node[data-tree-entry-type='directory']";

/// The span inside a row carrying the repository-relative path.
pub const PATH_TEXT_QUERY: &str = "span[data-filterable-item-text]";

/// The row's primary link; its fragment names the diff panel.
pub const ROW_ANCHOR_QUERY: &str = "a.ActionList-content";

/// The label element a row's toggle button is appended next to.
pub const ROW_LABEL_QUERY: &str = ".ActionList-item-label";

/// Diff-panel element ids start with this prefix.
pub const DIFF_ID_PREFIX: &str = "diff-";

/// Preferred wrapper around a diff panel; hiding this hides the panel chrome
/// as a unit.
pub const DIFF_CONTAINER_QUERY: &str = ".file";

// =============================================================================
// Produced DOM — controls and containers
// =============================================================================

/// Marker attribute on rows that already carry a toggle button.
pub const CONTROL_ATTACHED_ATTR: &str = "data-hide-btn";

/// Button attribute echoing the row's file path.
pub const CONTROL_PATH_ATTR: &str = "data-file-path";

/// Class of a toggle button whose next action is "hide".
pub const HIDE_CLASS: &str = "hide-tree-file-button";

/// Class of a toggle button whose next action is "unhide".
pub const UNHIDE_CLASS: &str = "unhide-tree-file-button";

/// Base classes shared by every toggle button.
pub const CONTROL_BASE_CLASSES: &str = "btn btn-sm";

/// Holding area for hidden rows, appended as a sibling of the tree.
pub const HOLDING_AREA_ID: &str = "pr-hidden-files-container";

/// Heading above the holding area.
pub const HOLDING_LABEL_ID: &str = "pr-hidden-files-label";

/// "Show All Hidden Files" button.
pub const SHOW_ALL_ID: &str = "pr-show-all-hidden";

/// "Share Hidden State" button.
pub const SHARE_ID: &str = "pr-share-hidden";

/// Container for the show-all/share buttons.
pub const ACTIONS_BAR_ID: &str = "pr-hidden-files-actions";

/// Control label strings.
pub mod labels {
    pub const HIDE: &str = "Hide";
    pub const UNHIDE: &str = "Unhide";
    pub const HOLDING: &str = "Hidden Files";
    pub const SHOW_ALL: &str = "Show All Hidden Files";
    pub const SHARE: &str = "Share Hidden State";
    pub const SHARE_OK: &str = "Link Copied!";
    pub const SHARE_ERR: &str = "Copy Failed";
}

// =============================================================================
// Timing
// =============================================================================

/// Delay constants (milliseconds).
pub mod delays {
    /// Poll interval while waiting for the file tree to render.
    pub const TREE_POLL_MS: u32 = 500;
    /// Debounce window coalescing a burst of tree mutations into one resync.
    pub const RESYNC_DEBOUNCE_MS: u32 = 100;
    /// Cool-down during which a just-clicked toggle button stays disabled.
    pub const TOGGLE_COOLDOWN_MS: u32 = 300;
    /// Retry interval for restoring a shared hidden set before rows exist.
    pub const RESTORE_RETRY_MS: u32 = 500;
    /// How long the share button shows its copied/failed feedback.
    pub const SHARE_LABEL_RESET_MS: u32 = 1500;
}

/// Upper bound on restore retries (with `RESTORE_RETRY_MS` spacing) before a
/// pending share token is abandoned.
pub const RESTORE_MAX_ATTEMPTS: u32 = 40;

// =============================================================================
// Share / Restore
// =============================================================================

/// URL fragment parameter carrying the share token: `#hide=<indices>`.
pub const FRAGMENT_PARAM: &str = "hide";

/// sessionStorage key holding a share token to apply once at startup. Takes
/// precedence over the URL fragment; consumed (removed) when read.
pub const RESTORE_SESSION_KEY: &str = "diffhide.pending";

/// sessionStorage key prefix for the per-page hidden-set snapshot, completed
/// with the page pathname.
pub const STATE_KEY_PREFIX: &str = "diffhide.state:";
