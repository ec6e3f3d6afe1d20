//! Archive records — the top-level vault containers known to the client.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Archive map keyed by archive id, in registration order.
pub type ArchiveMap = IndexMap<String, Arc<Archive>>;

/// Lock status of an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveStatus {
    /// Registered but not decrypted in this session.
    Locked,
    /// Open and readable.
    Unlocked,
}

impl ArchiveStatus {
    /// String representation for frontend display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
        }
    }
}

/// A top-level vault container record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub id: String,
    /// Display name shown in the archive switcher.
    pub name: String,
    #[serde(default = "default_status")]
    pub status: ArchiveStatus,
    /// ISO 8601 timestamp of the last unlock; absent for a never-opened
    /// archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<String>,
}

const fn default_status() -> ArchiveStatus {
    ArchiveStatus::Locked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_match_wire_values() {
        assert_eq!(ArchiveStatus::Locked.as_str(), "locked");
        assert_eq!(ArchiveStatus::Unlocked.as_str(), "unlocked");
    }

    #[test]
    fn serde_uses_camel_case() {
        let archive = Archive {
            id: "a1".into(),
            name: "Personal".into(),
            status: ArchiveStatus::Unlocked,
            last_accessed_at: Some("2026-08-01T10:00:00Z".into()),
        };
        let json = serde_json::to_string(&archive).unwrap();
        assert!(json.contains("lastAccessedAt"));
        assert!(!json.contains("last_accessed_at"));
    }

    #[test]
    fn status_defaults_to_locked() {
        let archive: Archive =
            serde_json::from_str(r#"{"id":"a1","name":"Personal"}"#).unwrap();
        assert_eq!(archive.status, ArchiveStatus::Locked);
        assert!(archive.last_accessed_at.is_none());
    }
}
