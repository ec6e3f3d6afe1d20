//! `coffre-views` — Derived view layer for COFFRE.
//!
//! Pure, memoized queries over a [`coffre_store::AppState`] snapshot. The
//! UI asks this layer for everything it renders: the archive switcher, the
//! sidebar group trees, the entry list, the saved window layout. Each
//! query owns an explicit cache cell and recomputes only when an input
//! slice it reads changes identity; unchanged snapshots are served from
//! cache as cheap `Arc` clones.
//!
//! Queries that assume snapshot integrity (visible entries, group trees,
//! trash children) surface violations as [`coffre_store::StoreError`]
//! values instead of panicking.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod archives;
pub mod entries;
pub mod groups;
pub mod memo;

pub use archives::{all_archives, all_settings, current_archive_id, ArchiveViews};
pub use entries::{all_entries, current_entry_id, EntryViews};
pub use groups::{
    current_group, current_group_id, groups_by_id, trash_group_id, GroupViews,
};
pub use memo::{Memo, SliceIdentity};

/// All view caches for one client window.
///
/// Holding the caches together keeps their scope explicit: drop the
/// `Views` and every cached projection goes with it.
#[derive(Debug, Default)]
pub struct Views {
    pub archives: ArchiveViews,
    pub entries: EntryViews,
    pub groups: GroupViews,
}

impl Views {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            archives: ArchiveViews::new(),
            entries: EntryViews::new(),
            groups: GroupViews::new(),
        }
    }
}
