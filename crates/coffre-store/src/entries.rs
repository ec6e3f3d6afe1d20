//! Entry records and the normalized entries region of a snapshot.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::collection::{Keyed, SortKey, SortMode};

/// Entry map keyed by entry id.
pub type EntryMap = IndexMap<String, Arc<Entry>>;

/// A single stored credential record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    /// Display title, e.g. the service name.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Secret material. Excluded from text filtering, masked in `Debug`,
    /// zeroized on drop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("username", &self.username)
            .field("url", &self.url)
            .field("notes", &self.notes)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Drop for Entry {
    fn drop(&mut self) {
        if let Some(ref mut password) = self.password {
            password.zeroize();
        }
    }
}

impl Keyed for Entry {
    fn key_value(&self, key: SortKey) -> Option<&str> {
        match key {
            SortKey::Title => Some(&self.title),
            SortKey::Username => self.username.as_deref(),
        }
    }
}

/// The normalized entries region of a state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesState {
    /// All entry records of the current archive.
    #[serde(default)]
    pub by_id: Arc<EntryMap>,
    /// Ids visible in the entry list, in display order. Invariant: every
    /// id resolves in `by_id`.
    #[serde(default)]
    pub shown_ids: Arc<Vec<String>>,
    /// Active text filter; empty when filtering is off.
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub sort_mode: SortMode,
    /// Id of the focused entry, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_entry: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str) -> Entry {
        Entry {
            id: id.into(),
            title: title.into(),
            username: None,
            url: None,
            notes: None,
            password: Some("hunter2".into()),
        }
    }

    #[test]
    fn debug_masks_the_password() {
        let debug = format!("{:?}", entry("e1", "Mail"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn serde_uses_camel_case_and_skips_absent_fields() {
        let mut record = entry("e1", "Mail");
        record.username = Some("kim".into());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""username":"kim""#));
        assert!(!json.contains("url"));
        assert!(!json.contains("notes"));
    }

    #[test]
    fn entries_state_defaults_are_empty() {
        let state = EntriesState::default();
        assert!(state.by_id.is_empty());
        assert!(state.shown_ids.is_empty());
        assert!(state.filter.is_empty());
        assert_eq!(state.sort_mode, SortMode::TitleAsc);
        assert!(state.current_entry.is_none());
    }

    #[test]
    fn title_is_the_default_sort_key_value() {
        let record = entry("e1", "Mail");
        assert_eq!(record.key_value(SortKey::Title), Some("Mail"));
        assert_eq!(record.key_value(SortKey::Username), None);
    }
}
