//! Text filtering and key-based sorting over snapshot records.
//!
//! Every function here is pure and order-preserving for ties: sorts are
//! stable, and descending order reverses the comparator rather than the
//! result so equal keys keep their input order. Key comparison is
//! case-insensitive via Unicode lowercasing.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::archives::Archive;
use crate::entries::Entry;
use crate::groups::GroupNode;

// ── Sort modes ─────────────────────────────────────────────────────

/// Field a sort mode compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Username,
}

/// Direction of a sort mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// List sort mode as selected in the UI.
///
/// Wire strings follow the `key-direction` convention of the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "title-asc")]
    TitleAsc,
    #[serde(rename = "title-desc")]
    TitleDesc,
    #[serde(rename = "username-asc")]
    UsernameAsc,
    #[serde(rename = "username-desc")]
    UsernameDesc,
}

impl SortMode {
    /// The field this mode compares on.
    #[must_use]
    pub const fn key(self) -> SortKey {
        match self {
            Self::TitleAsc | Self::TitleDesc => SortKey::Title,
            Self::UsernameAsc | Self::UsernameDesc => SortKey::Username,
        }
    }

    /// The direction this mode orders in.
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        match self {
            Self::TitleAsc | Self::UsernameAsc => SortDirection::Ascending,
            Self::TitleDesc | Self::UsernameDesc => SortDirection::Descending,
        }
    }

    /// The wire string stored in snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::UsernameAsc => "username-asc",
            Self::UsernameDesc => "username-desc",
        }
    }
}

/// Access to the string value a record sorts on.
pub trait Keyed {
    /// The record's value for `key`; `None` when the record has no such
    /// field. Missing values compare as the empty string.
    fn key_value(&self, key: SortKey) -> Option<&str>;
}

fn compare_keyed<T: Keyed>(a: &T, b: &T, mode: SortMode) -> Ordering {
    let key = mode.key();
    let a_value = a.key_value(key).unwrap_or("").to_lowercase();
    let b_value = b.key_value(key).unwrap_or("").to_lowercase();
    match mode.direction() {
        SortDirection::Ascending => a_value.cmp(&b_value),
        SortDirection::Descending => b_value.cmp(&a_value),
    }
}

// ── Filtering ──────────────────────────────────────────────────────

/// Case-insensitive substring filter over entry text fields.
///
/// Matches title, username, url, and notes; never the password. Preserves
/// the relative order of matching entries.
#[must_use]
pub fn filter_by_text(entries: &[Arc<Entry>], needle: &str) -> Vec<Arc<Entry>> {
    let needle = needle.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry_matches(entry, &needle))
        .cloned()
        .collect()
}

fn entry_matches(entry: &Entry, needle: &str) -> bool {
    [
        Some(entry.title.as_str()),
        entry.username.as_deref(),
        entry.url.as_deref(),
        entry.notes.as_deref(),
    ]
    .iter()
    .flatten()
    .any(|text| text.to_lowercase().contains(needle))
}

// ── Sorting ────────────────────────────────────────────────────────

/// Stable key sort of `items` by `mode`.
#[must_use]
pub fn sort_by_key<T: Keyed>(items: &[Arc<T>], mode: SortMode) -> Vec<Arc<T>> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_keyed(a.as_ref(), b.as_ref(), mode));
    sorted
}

/// Sort group trees by `mode`, recursively sorting each node's children.
#[must_use]
pub fn sort_deep_by_key(nodes: &[GroupNode], mode: SortMode) -> Vec<GroupNode> {
    let mut sorted: Vec<GroupNode> = nodes
        .iter()
        .map(|node| GroupNode {
            id: node.id.clone(),
            title: node.title.clone(),
            is_new: node.is_new,
            is_trash: node.is_trash,
            groups: sort_deep_by_key(&node.groups, mode),
        })
        .collect();
    sorted.sort_by(|a, b| compare_keyed(a, b, mode));
    sorted
}

/// Archives ordered most recently accessed first.
///
/// Never-accessed archives sort after all timestamped ones; equal
/// timestamps keep input order.
#[must_use]
pub fn sort_by_last_accessed(archives: &[Arc<Archive>]) -> Vec<Arc<Archive>> {
    let mut sorted = archives.to_vec();
    sorted.sort_by(|a, b| b.last_accessed_at.cmp(&a.last_accessed_at));
    sorted
}
