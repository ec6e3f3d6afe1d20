//! Group records, the normalized groups region, and tree denormalization.
//!
//! Groups are folder-like nodes organizing entries. The snapshot stores
//! them flat (`by_id` plus child-id lists); [`denormalize_groups`] expands
//! the shown roots into fully inlined trees for the sidebar.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::collection::{Keyed, SortKey, SortMode};
use crate::error::StoreError;

/// Group map keyed by group id.
pub type GroupMap = IndexMap<String, Arc<Group>>;

/// A folder-like node organizing entries.
///
/// At most one group per snapshot carries `is_trash`; that group is the
/// trash root and its `groups` field lists the trash's direct children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub title: String,
    /// Direct child group ids.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Freshly created and not yet acknowledged by the user.
    #[serde(default)]
    pub is_new: bool,
    /// Trash root flag.
    #[serde(default)]
    pub is_trash: bool,
}

/// The normalized groups region of a state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsState {
    /// All group records of the current archive.
    #[serde(default)]
    pub by_id: Arc<GroupMap>,
    /// Root group ids shown in the sidebar, in display order.
    #[serde(default)]
    pub shown_ids: Arc<Vec<String>>,
    #[serde(default)]
    pub sort_mode: SortMode,
    /// Id of the selected group, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_group: Option<String>,
}

/// A fully inlined group tree produced by [`denormalize_groups`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    pub id: String,
    pub title: String,
    pub is_new: bool,
    pub is_trash: bool,
    /// Child trees, in the parent's child-id order.
    pub groups: Vec<GroupNode>,
}

impl Keyed for GroupNode {
    fn key_value(&self, key: SortKey) -> Option<&str> {
        match key {
            SortKey::Title => Some(&self.title),
            SortKey::Username => None,
        }
    }
}

/// Expand `root_ids` into fully inlined trees via `by_id`.
///
/// Children are expanded recursively in their parent's child-id order.
///
/// # Errors
///
/// Returns [`StoreError::GroupNotFound`] when a root or child id has no
/// record, and [`StoreError::GroupCycle`] when a child chain loops back
/// onto an ancestor (both are snapshot integrity defects).
pub fn denormalize_groups(
    root_ids: &[String],
    by_id: &GroupMap,
) -> Result<Vec<GroupNode>, StoreError> {
    let mut path = Vec::new();
    root_ids
        .iter()
        .map(|id| expand(id, by_id, &mut path))
        .collect()
}

fn expand(
    id: &str,
    by_id: &GroupMap,
    path: &mut Vec<String>,
) -> Result<GroupNode, StoreError> {
    if path.iter().any(|ancestor| ancestor == id) {
        return Err(StoreError::GroupCycle(id.to_owned()));
    }
    let group = by_id
        .get(id)
        .ok_or_else(|| StoreError::GroupNotFound(id.to_owned()))?;

    path.push(id.to_owned());
    let children: Result<Vec<GroupNode>, StoreError> = group
        .groups
        .iter()
        .map(|child| expand(child, by_id, path))
        .collect();
    path.pop();

    Ok(GroupNode {
        id: group.id.clone(),
        title: group.title.clone(),
        is_new: group.is_new,
        is_trash: group.is_trash,
        groups: children?,
    })
}
