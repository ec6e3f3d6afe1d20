//! Group tree views: denormalization, trash partitioning, deep sorting.

use std::sync::Arc;

use coffre_store::{
    denormalize_groups, sort_deep_by_key, AppState, Group, GroupMap, GroupNode,
    SortMode, StoreError,
};

use crate::memo::Memo;

/// All group records of the open archive, keyed by id.
#[must_use]
pub fn groups_by_id(state: &AppState) -> Arc<GroupMap> {
    Arc::clone(&state.groups.by_id)
}

/// The selected group's id, if any.
#[must_use]
pub fn current_group_id(state: &AppState) -> Option<&str> {
    state.groups.current_group.as_deref()
}

/// The selected group's record; `None` when unset or unknown.
#[must_use]
pub fn current_group(state: &AppState) -> Option<Arc<Group>> {
    state
        .groups
        .current_group
        .as_ref()
        .and_then(|id| state.groups.by_id.get(id))
        .cloned()
}

/// Id of the trash root, `None` when the snapshot has none.
///
/// Should more than one group carry the trash flag (an invariant
/// violation), the first in map order wins.
#[must_use]
pub fn trash_group_id(state: &AppState) -> Option<&str> {
    state
        .groups
        .by_id
        .iter()
        .find(|(_, group)| group.is_trash)
        .map(|(id, _)| id.as_str())
}

/// Memoized group queries.
#[derive(Debug)]
pub struct GroupViews {
    all_groups:
        Memo<(Arc<GroupMap>, Arc<Vec<String>>), Result<Arc<Vec<GroupNode>>, StoreError>>,
    dismissable: Memo<Arc<GroupMap>, Arc<Vec<String>>>,
    trash_children: Memo<Arc<GroupMap>, Result<Arc<Vec<String>>, StoreError>>,
    groups: Memo<(Arc<Vec<GroupNode>>, SortMode), Arc<Vec<GroupNode>>>,
}

impl GroupViews {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            all_groups: Memo::new("allGroups"),
            dismissable: Memo::new("dismissableGroupIds"),
            trash_children: Memo::new("trashChildrenIds"),
            groups: Memo::new("groups"),
        }
    }

    /// All shown groups as fully inlined trees, in `shown_ids` order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GroupNotFound`] or [`StoreError::GroupCycle`]
    /// when the flat group records violate referential integrity.
    pub fn all_groups(&mut self, state: &AppState) -> Result<Arc<Vec<GroupNode>>, StoreError> {
        self.all_groups.apply(
            (
                Arc::clone(&state.groups.by_id),
                Arc::clone(&state.groups.shown_ids),
            ),
            |(by_id, shown_ids)| denormalize_groups(shown_ids, by_id).map(Arc::new),
        )
    }

    /// Ids of freshly created groups awaiting acknowledgement.
    ///
    /// Order follows map iteration; callers should treat the result as an
    /// unordered set.
    pub fn dismissable_group_ids(&mut self, state: &AppState) -> Arc<Vec<String>> {
        self.dismissable
            .apply(Arc::clone(&state.groups.by_id), |by_id| {
                Arc::new(
                    by_id
                        .iter()
                        .filter(|(_, group)| group.is_new)
                        .map(|(id, _)| id.clone())
                        .collect(),
                )
            })
    }

    /// Direct children ids of the trash root.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TrashGroupMissing`] when no group carries the
    /// trash flag.
    pub fn trash_children_ids(
        &mut self,
        state: &AppState,
    ) -> Result<Arc<Vec<String>>, StoreError> {
        self.trash_children
            .apply(Arc::clone(&state.groups.by_id), |by_id| {
                by_id
                    .values()
                    .find(|group| group.is_trash)
                    .map(|group| Arc::new(group.groups.clone()))
                    .ok_or(StoreError::TrashGroupMissing)
            })
    }

    /// Shown group trees as rendered: non-trash trees deep-sorted by the
    /// active sort mode, trash roots appended last in their original
    /// relative order. No trash root ever precedes a non-trash root.
    ///
    /// # Errors
    ///
    /// Propagates integrity errors from [`Self::all_groups`].
    pub fn groups(&mut self, state: &AppState) -> Result<Arc<Vec<GroupNode>>, StoreError> {
        let all = self.all_groups(state)?;
        Ok(self
            .groups
            .apply((all, state.groups.sort_mode), |(all, sort_mode)| {
                let (trash, rest): (Vec<GroupNode>, Vec<GroupNode>) =
                    all.iter().cloned().partition(|group| group.is_trash);
                let mut ordered = sort_deep_by_key(&rest, *sort_mode);
                ordered.extend(trash);
                Arc::new(ordered)
            }))
    }
}

impl Default for GroupViews {
    fn default() -> Self {
        Self::new()
    }
}
