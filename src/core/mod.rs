//! The pure reconciliation engine.
//!
//! Nothing in here touches the DOM; every module compiles and unit-tests on
//! the native host. The browser layer plugs in through the [`TreeView`] and
//! [`TimerHost`] seams.
//!
//! - [`visibility`] - authoritative hidden-set model and derived directory state
//! - [`toggle`] - the hide/unhide state machine and bulk show-all
//! - [`share`] - share-token codec and restore resolution
//! - [`sched`] - cancellable debounce primitive
//! - [`error`] - error taxonomy

pub mod error;
pub mod sched;
pub mod share;
pub mod toggle;
pub mod visibility;

pub use sched::TimerHost;
pub use toggle::TreeView;
