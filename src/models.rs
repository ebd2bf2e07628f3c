//! Response payload types for WordPress.com endpoints.

use std::collections::HashMap;

use serde::Deserialize;

/// Profile of the authenticated user (`GET me`).
#[derive(Debug, Clone, Deserialize)]
pub struct Me {
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Account username.
    #[serde(default)]
    pub username: Option<String>,

    /// Account email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Avatar image URL.
    #[serde(default, rename = "avatar_URL")]
    pub avatar_url: Option<String>,

    /// Public profile URL.
    #[serde(default, rename = "profile_URL")]
    pub profile_url: Option<String>,
}

/// Notification list envelope (`GET notifications`).
#[derive(Debug, Clone, Deserialize)]
pub struct Notes {
    /// Number of notifications returned.
    #[serde(default)]
    pub number: i64,

    /// Timestamp of the most recently seen notification.
    #[serde(default)]
    pub last_seen_time: i64,

    /// The notifications themselves.
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// A single notification.
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    /// Notification identifier.
    pub id: u64,

    /// Unread count.
    #[serde(default)]
    pub unread: i64,

    /// Notification type (e.g. "comment", "like").
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Unix timestamp of the notification.
    #[serde(default)]
    pub timestamp: i64,

    /// Subject fragments keyed by format.
    #[serde(default)]
    pub subject: HashMap<String, String>,

    /// Body fragments keyed by format.
    #[serde(default)]
    pub body: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_deserializes_with_renamed_url_fields() {
        let json = r#"{
            "display_name": "Alice",
            "username": "alice",
            "email": "alice@example.com",
            "avatar_URL": "https://gravatar.example/alice",
            "profile_URL": "https://profiles.example/alice"
        }"#;

        let me: Me = serde_json::from_str(json).unwrap();

        assert_eq!(me.username.as_deref(), Some("alice"));
        assert_eq!(me.avatar_url.as_deref(), Some("https://gravatar.example/alice"));
        assert_eq!(me.profile_url.as_deref(), Some("https://profiles.example/alice"));
    }

    #[test]
    fn test_notes_deserializes_list() {
        let json = r#"{
            "number": 1,
            "last_seen_time": 1700000000,
            "notes": [{
                "id": 42,
                "unread": 1,
                "type": "comment",
                "timestamp": 1700000001,
                "subject": {"text": "New comment"},
                "body": {"text": "Someone replied"}
            }]
        }"#;

        let notes: Notes = serde_json::from_str(json).unwrap();

        assert_eq!(notes.number, 1);
        assert_eq!(notes.notes.len(), 1);
        assert_eq!(notes.notes[0].id, 42);
        assert_eq!(notes.notes[0].kind, "comment");
        assert_eq!(notes.notes[0].subject.get("text").map(String::as_str), Some("New comment"));
    }

    #[test]
    fn test_note_tolerates_missing_optional_fields() {
        let json = r#"{"id": 7}"#;

        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note.id, 7);
        assert_eq!(note.unread, 0);
        assert!(note.kind.is_empty());
        assert!(note.subject.is_empty());
    }
}
