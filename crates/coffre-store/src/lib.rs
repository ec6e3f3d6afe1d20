//! `coffre-store` — Normalized client state model for COFFRE.
//!
//! Holds the immutable state snapshot types (archives, per-archive
//! settings, entries, groups) plus the collection utilities and the group
//! denormalizer that the derived view layer (`coffre-views`) queries
//! against. This crate performs no I/O and owns no mutable state; the
//! store writer lives elsewhere and publishes whole snapshots.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod archives;
pub mod collection;
pub mod entries;
pub mod error;
pub mod groups;
pub mod settings;
pub mod state;

pub use archives::{Archive, ArchiveMap, ArchiveStatus};
pub use collection::{
    filter_by_text, sort_by_key, sort_by_last_accessed, sort_deep_by_key, Keyed,
    SortDirection, SortKey, SortMode,
};
pub use entries::{EntriesState, Entry, EntryMap};
pub use error::StoreError;
pub use groups::{denormalize_groups, Group, GroupMap, GroupNode, GroupsState};
pub use settings::{
    ArchiveSettings, ColumnSizes, SettingsMap, UiSettings, DEFAULT_WINDOW_SIZE,
};
pub use state::AppState;
