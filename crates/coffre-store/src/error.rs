//! Store error types for `coffre-store`.

use thiserror::Error;

/// Errors produced when a snapshot violates referential integrity.
///
/// `Clone` and `PartialEq` so that derived-view caches can hold and
/// re-serve a failed result without recomputing it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A shown entry id has no record in the entry map.
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    /// A group id referenced by a root list or a parent has no record.
    #[error("group not found: {0}")]
    GroupNotFound(String),

    /// A group's child chain loops back onto an ancestor.
    #[error("group cycle through: {0}")]
    GroupCycle(String),

    /// No group in the snapshot is flagged as the trash root.
    #[error("no trash group in archive")]
    TrashGroupMissing,

    /// A state snapshot could not be decoded from or encoded to JSON.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}
