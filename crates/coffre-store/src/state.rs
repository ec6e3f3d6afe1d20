//! The immutable client state snapshot.
//!
//! A snapshot is the single input of every derived view. Shared regions
//! are `Arc`-wrapped: the store replaces a region's `Arc` when that region
//! changes, so views can detect "unchanged since last call" by pointer
//! identity without walking the data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::archives::ArchiveMap;
use crate::entries::EntriesState;
use crate::error::StoreError;
use crate::groups::GroupsState;
use crate::settings::SettingsMap;

/// One immutable snapshot of the client store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// All registered archives, in registration order.
    #[serde(default)]
    pub archives: Arc<ArchiveMap>,
    /// Id of the open archive, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_archive: Option<String>,
    /// Per-archive UI settings.
    #[serde(default)]
    pub settings_by_archive_id: Arc<SettingsMap>,
    #[serde(default)]
    pub entries: EntriesState,
    #[serde(default)]
    pub groups: GroupsState,
}

impl AppState {
    /// Decode a snapshot from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] when the JSON is malformed or does
    /// not match the snapshot shape.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        serde_json::from_str(json).map_err(|e| StoreError::Snapshot(e.to_string()))
    }

    /// Encode the snapshot to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] when serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::Snapshot(e.to_string()))
    }
}
