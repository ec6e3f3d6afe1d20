//! Per-archive UI settings.
//!
//! Each archive carries its own window layout so switching archives
//! restores the layout the user left it with. All fields default via
//! serde so a partial snapshot hydrates cleanly.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Settings map keyed by archive id.
pub type SettingsMap = IndexMap<String, Arc<ArchiveSettings>>;

/// Default main-window size in logical pixels.
///
/// First-run layout relies on this exact value.
pub const DEFAULT_WINDOW_SIZE: [u32; 2] = [950, 700];

/// Widths of the sidebar tree and the entry list columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSizes {
    pub tree: f64,
    pub entries: f64,
}

/// Window-layout state for one archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    /// Keys of the sidebar tree nodes currently expanded.
    #[serde(default)]
    pub tree_expanded_keys: Vec<String>,

    /// Column widths; absent until the user first drags a divider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_sizes: Option<ColumnSizes>,

    /// Main-window size as `[width, height]`.
    #[serde(default = "default_window_size")]
    pub window_size: [u32; 2],
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tree_expanded_keys: Vec::new(),
            column_sizes: None,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

const fn default_window_size() -> [u32; 2] {
    DEFAULT_WINDOW_SIZE
}

/// All persisted settings for one archive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveSettings {
    #[serde(default)]
    pub ui: UiSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_correct() {
        let ui = UiSettings::default();
        assert!(ui.tree_expanded_keys.is_empty());
        assert!(ui.column_sizes.is_none());
        assert_eq!(ui.window_size, [950, 700]);
    }

    #[test]
    fn partial_json_hydrates_with_defaults() {
        // Only expanded keys are set; the rest should default.
        let ui: UiSettings =
            serde_json::from_str(r#"{"treeExpandedKeys":["g1","g2"]}"#).unwrap();
        assert_eq!(ui.tree_expanded_keys, vec!["g1", "g2"]);
        assert!(ui.column_sizes.is_none());
        assert_eq!(ui.window_size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn empty_object_is_a_valid_settings_record() {
        let settings: ArchiveSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ArchiveSettings::default());
    }

    #[test]
    fn serde_uses_camel_case() {
        let settings = ArchiveSettings {
            ui: UiSettings {
                tree_expanded_keys: vec!["g1".into()],
                column_sizes: Some(ColumnSizes {
                    tree: 230.0,
                    entries: 320.0,
                }),
                window_size: [1200, 800],
            },
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("treeExpandedKeys"));
        assert!(json.contains("columnSizes"));
        assert!(json.contains("windowSize"));
        assert!(!json.contains("tree_expanded_keys"));
    }

    #[test]
    fn absent_column_sizes_round_trips_as_absent() {
        let json = serde_json::to_string(&ArchiveSettings::default()).unwrap();
        assert!(!json.contains("columnSizes"));
    }
}
