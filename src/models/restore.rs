//! Bookkeeping for restoring a shared hidden set.
//!
//! A restore may arrive before the host page has rendered any file rows, so
//! it is retried on a timer. [`PendingRestore`] tracks what to apply and how
//! many attempts remain; the timer plumbing lives in the session layer.

use crate::config::RESTORE_MAX_ATTEMPTS;

/// What a pending restore should apply once rows exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestorePlan {
    /// Zero-based indices into the lexicographic order of known file paths
    /// (the share-token format).
    Indices(Vec<usize>),
    /// Explicit file paths (the per-page snapshot format).
    Paths(Vec<String>),
}

/// A restore waiting for the file tree to populate.
#[derive(Debug, Clone)]
pub struct PendingRestore {
    pub plan: RestorePlan,
    attempts: u32,
}

impl PendingRestore {
    pub fn new(plan: RestorePlan) -> Self {
        Self { plan, attempts: 0 }
    }

    /// Record one failed attempt. Returns `true` while retrying is still
    /// allowed, `false` once the attempt budget is exhausted.
    pub fn next_attempt(&mut self) -> bool {
        self.attempts += 1;
        self.attempts < RESTORE_MAX_ATTEMPTS
    }

    /// Nothing to apply at all (empty token / empty snapshot).
    pub fn is_empty(&self) -> bool {
        match &self.plan {
            RestorePlan::Indices(indices) => indices.is_empty(),
            RestorePlan::Paths(paths) => paths.is_empty(),
        }
    }
}
