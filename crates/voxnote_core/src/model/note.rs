//! Note domain record.
//!
//! # Responsibility
//! - Define the persisted note shape: identity, creation time, content.
//! - Provide draft validation for the save path.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` is captured once at construction and never changes.
//! - `content` is stored verbatim; validation trims only for the emptiness
//!   check, never for storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A user-authored text record.
///
/// Serialized as `{"id": ..., "date": ..., "content": ...}`; the creation
/// timestamp travels under the external field name `date` in RFC-3339 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for identity and deletion.
    pub id: NoteId,
    /// Creation instant. Informational; not used for ordering.
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    /// Free text, sourced from typing or transcription.
    pub content: String,
}

impl Note {
    /// Creates a note with a generated stable ID and the current instant.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_parts(Uuid::new_v4(), Utc::now(), content)
    }

    /// Creates a note from caller-provided identity and timestamp.
    ///
    /// Used by hydration and test paths where identity already exists.
    pub fn with_parts(
        id: NoteId,
        created_at: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            created_at,
            content: content.into(),
        }
    }
}

/// Draft content rejected before note construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    /// Draft is empty or whitespace-only.
    Empty,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "draft content must not be empty"),
        }
    }
}

impl Error for DraftValidationError {}

/// Validates draft text for the save path.
///
/// # Contract
/// - Whitespace-only drafts are rejected.
/// - Accepted drafts are persisted verbatim, untrimmed.
pub fn validate_draft(content: &str) -> Result<(), DraftValidationError> {
    if content.trim().is_empty() {
        return Err(DraftValidationError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_draft, DraftValidationError, Note};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn new_notes_get_unique_ids() {
        let first = Note::new("first");
        let second = Note::new("second");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn serializes_created_at_under_date_field() {
        let created_at = Utc.with_ymd_and_hms(2024, 2, 5, 12, 30, 0).unwrap();
        let note = Note::with_parts(Uuid::new_v4(), created_at, "corpo da nota");

        let json = serde_json::to_value(&note).expect("note serializes");
        assert_eq!(json["date"], "2024-02-05T12:30:00Z");
        assert_eq!(json["content"], "corpo da nota");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn deserializes_from_external_layout() {
        let json = r#"{"id":"7f7e9a9c-3a66-4f7e-9d8e-52d7a8b9f2aa","date":"2024-02-05T12:30:00.123Z","content":"buy milk"}"#;
        let note: Note = serde_json::from_str(json).expect("note deserializes");
        assert_eq!(note.content, "buy milk");
        assert_eq!(
            note.id.to_string(),
            "7f7e9a9c-3a66-4f7e-9d8e-52d7a8b9f2aa"
        );
    }

    #[test]
    fn validate_draft_rejects_empty_and_whitespace() {
        assert_eq!(validate_draft(""), Err(DraftValidationError::Empty));
        assert_eq!(validate_draft("   \n\t"), Err(DraftValidationError::Empty));
        assert_eq!(validate_draft("  ok  "), Ok(()));
    }
}
