//! Entry list views: current entry, visibility, filtering, and sorting.

use std::sync::Arc;

use coffre_store::{
    filter_by_text, sort_by_key, AppState, Entry, EntryMap, SortMode, StoreError,
};

use crate::memo::Memo;

/// All entry records of the open archive, keyed by id.
#[must_use]
pub fn all_entries(state: &AppState) -> Arc<EntryMap> {
    Arc::clone(&state.entries.by_id)
}

/// The focused entry's id, if any.
#[must_use]
pub fn current_entry_id(state: &AppState) -> Option<&str> {
    state.entries.current_entry.as_deref()
}

/// Memoized entry queries.
#[derive(Debug)]
pub struct EntryViews {
    current_entry: Memo<(Arc<EntryMap>, Option<String>), Option<Arc<Entry>>>,
    visible_entries:
        Memo<(Arc<EntryMap>, Arc<Vec<String>>), Result<Arc<Vec<Arc<Entry>>>, StoreError>>,
    entries: Memo<(Arc<Vec<Arc<Entry>>>, String, SortMode), Arc<Vec<Arc<Entry>>>>,
}

impl EntryViews {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_entry: Memo::new("currentEntry"),
            visible_entries: Memo::new("visibleEntries"),
            entries: Memo::new("entries"),
        }
    }

    /// The focused entry's record; `None` when unset or unknown.
    pub fn current_entry(&mut self, state: &AppState) -> Option<Arc<Entry>> {
        self.current_entry.apply(
            (
                Arc::clone(&state.entries.by_id),
                state.entries.current_entry.clone(),
            ),
            |(entries, id)| id.as_ref().and_then(|id| entries.get(id)).cloned(),
        )
    }

    /// Entry records in `shown_ids` order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EntryNotFound`] when a shown id has no record,
    /// which signals a snapshot integrity defect upstream.
    pub fn visible_entries(
        &mut self,
        state: &AppState,
    ) -> Result<Arc<Vec<Arc<Entry>>>, StoreError> {
        self.visible_entries.apply(
            (
                Arc::clone(&state.entries.by_id),
                Arc::clone(&state.entries.shown_ids),
            ),
            |(by_id, shown_ids)| {
                shown_ids
                    .iter()
                    .map(|id| {
                        by_id
                            .get(id)
                            .cloned()
                            .ok_or_else(|| StoreError::EntryNotFound(id.clone()))
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Arc::new)
            },
        )
    }

    /// The entry list as rendered: filtered by the active text filter, or
    /// sorted by the active sort mode when no filter is set. A non-empty
    /// filter suppresses sorting.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError::EntryNotFound`] from the visibility
    /// projection.
    pub fn entries(&mut self, state: &AppState) -> Result<Arc<Vec<Arc<Entry>>>, StoreError> {
        let visible = self.visible_entries(state)?;
        Ok(self.entries.apply(
            (visible, state.entries.filter.clone(), state.entries.sort_mode),
            |(visible, filter, sort_mode)| {
                if filter.is_empty() {
                    Arc::new(sort_by_key(visible, *sort_mode))
                } else {
                    Arc::new(filter_by_text(visible, filter))
                }
            },
        ))
    }
}

impl Default for EntryViews {
    fn default() -> Self {
        Self::new()
    }
}
