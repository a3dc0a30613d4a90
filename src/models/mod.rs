//! Data types shared across the engine and the browser layer.
//!
//! - [`ControlRole`] - which control a delegated click landed on
//! - [`PendingRestore`], [`RestorePlan`] - bookkeeping for a deferred restore

mod controls;
mod restore;

pub use controls::ControlRole;
pub use restore::{PendingRestore, RestorePlan};
