//! Archive, settings, and window-layout views.

use std::sync::Arc;

use coffre_store::{
    sort_by_last_accessed, AppState, Archive, ArchiveMap, ArchiveSettings,
    ColumnSizes, SettingsMap, DEFAULT_WINDOW_SIZE,
};

use crate::memo::Memo;

/// The open archive's id, or `None` when no archive is open.
#[must_use]
pub fn current_archive_id(state: &AppState) -> Option<&str> {
    state.current_archive.as_deref()
}

/// All archive records in registration order.
#[must_use]
pub fn all_archives(state: &AppState) -> Vec<Arc<Archive>> {
    state.archives.values().cloned().collect()
}

/// All per-archive settings records.
#[must_use]
pub fn all_settings(state: &AppState) -> Arc<SettingsMap> {
    Arc::clone(&state.settings_by_archive_id)
}

/// Memoized archive and settings queries.
///
/// One cache cell per query; settings-derived queries chain on the
/// memoized `current_archive_settings` output, so an unchanged settings
/// record short-circuits the whole chain.
#[derive(Debug)]
pub struct ArchiveViews {
    sorted_archives: Memo<Arc<ArchiveMap>, Arc<Vec<Arc<Archive>>>>,
    current_archive: Memo<(Arc<ArchiveMap>, Option<String>), Option<Arc<Archive>>>,
    current_settings: Memo<(Arc<SettingsMap>, Option<String>), Option<Arc<ArchiveSettings>>>,
    expanded_keys: Memo<Option<Arc<ArchiveSettings>>, Arc<Vec<String>>>,
    column_sizes: Memo<Option<Arc<ArchiveSettings>>, Option<ColumnSizes>>,
    window_size: Memo<Option<Arc<ArchiveSettings>>, [u32; 2]>,
}

impl ArchiveViews {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sorted_archives: Memo::new("sortedArchives"),
            current_archive: Memo::new("currentArchive"),
            current_settings: Memo::new("currentArchiveSettings"),
            expanded_keys: Memo::new("expandedKeys"),
            column_sizes: Memo::new("columnSizes"),
            window_size: Memo::new("windowSize"),
        }
    }

    /// Archives ordered most recently accessed first; never-accessed
    /// archives last; ties keep registration order.
    pub fn sorted_archives(&mut self, state: &AppState) -> Arc<Vec<Arc<Archive>>> {
        self.sorted_archives
            .apply(Arc::clone(&state.archives), |archives| {
                let all: Vec<Arc<Archive>> = archives.values().cloned().collect();
                Arc::new(sort_by_last_accessed(&all))
            })
    }

    /// The open archive's record; `None` when no archive is open or the
    /// current id is unknown.
    pub fn current_archive(&mut self, state: &AppState) -> Option<Arc<Archive>> {
        self.current_archive.apply(
            (Arc::clone(&state.archives), state.current_archive.clone()),
            |(archives, id)| id.as_ref().and_then(|id| archives.get(id)).cloned(),
        )
    }

    /// The open archive's settings record, if one exists.
    pub fn current_archive_settings(
        &mut self,
        state: &AppState,
    ) -> Option<Arc<ArchiveSettings>> {
        self.current_settings.apply(
            (
                Arc::clone(&state.settings_by_archive_id),
                state.current_archive.clone(),
            ),
            |(settings, id)| id.as_ref().and_then(|id| settings.get(id)).cloned(),
        )
    }

    /// Sidebar tree keys currently expanded; empty without an open archive.
    pub fn expanded_keys(&mut self, state: &AppState) -> Arc<Vec<String>> {
        let settings = self.current_archive_settings(state);
        self.expanded_keys.apply(settings, |settings| {
            settings.as_ref().map_or_else(
                || Arc::new(Vec::new()),
                |s| Arc::new(s.ui.tree_expanded_keys.clone()),
            )
        })
    }

    /// Saved column widths; `None` without an open archive or before the
    /// user ever resized a column.
    pub fn column_sizes(&mut self, state: &AppState) -> Option<ColumnSizes> {
        let settings = self.current_archive_settings(state);
        self.column_sizes.apply(settings, |settings| {
            settings.as_ref().and_then(|s| s.ui.column_sizes)
        })
    }

    /// Main-window size; `[950, 700]` without an open archive.
    pub fn window_size(&mut self, state: &AppState) -> [u32; 2] {
        let settings = self.current_archive_settings(state);
        self.window_size.apply(settings, |settings| {
            settings
                .as_ref()
                .map_or(DEFAULT_WINDOW_SIZE, |s| s.ui.window_size)
        })
    }
}

impl Default for ArchiveViews {
    fn default() -> Self {
        Self::new()
    }
}
