//! sessionStorage-backed JSON snapshots.
//!
//! Used for the per-page hidden-set snapshot, so soft navigations within the
//! same tab restore the reviewer's hidden files. The browser clears
//! sessionStorage when the tab closes, which matches the crate's
//! no-cross-session-persistence rule.

use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::SnapshotError;

use super::dom;

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), SnapshotError> {
    let storage = dom::session_storage().ok_or(SnapshotError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| SnapshotError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| SnapshotError::WriteFailed)
}

/// Read a raw string value once, removing it from storage.
pub fn take_raw(key: &str) -> Option<String> {
    let storage = dom::session_storage()?;
    let value = storage.get_item(key).ok()??;
    let _ = storage.remove_item(key);
    Some(value)
}
