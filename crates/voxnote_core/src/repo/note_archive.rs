//! Keyed-blob archive contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and store the serialized note collection under one archive key.
//! - Keep blob codec details (JSON array of note records) out of callers.
//!
//! # Invariants
//! - Every store replaces the previous blob wholesale.
//! - Absent blob reads as an empty collection; corrupt blob reads as a typed
//!   deserialization error.

use crate::db::DbError;
use crate::model::note::Note;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Archive key holding the serialized note collection.
pub const NOTES_ARCHIVE_KEY: &str = "voxnote:notes";

pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Persistence-adapter error for blob load/store operations.
#[derive(Debug)]
pub enum ArchiveError {
    Db(DbError),
    Serialize(serde_json::Error),
    /// Stored blob exists but does not decode into a note collection.
    Deserialize(serde_json::Error),
}

impl Display for ArchiveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize note collection: {err}"),
            Self::Deserialize(err) => {
                write!(f, "failed to deserialize persisted note collection: {err}")
            }
        }
    }
}

impl Error for ArchiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) | Self::Deserialize(err) => Some(err),
        }
    }
}

impl From<DbError> for ArchiveError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for ArchiveError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Archive interface for whole-collection persistence.
pub trait NoteArchive {
    /// Loads the persisted collection; absent blob yields an empty vec.
    fn load(&self) -> ArchiveResult<Vec<Note>>;
    /// Replaces the persisted collection with `notes`.
    fn store(&self, notes: &[Note]) -> ArchiveResult<()>;
}

/// SQLite-backed archive storing the collection under [`NOTES_ARCHIVE_KEY`].
pub struct SqliteNoteArchive<'conn> {
    conn: &'conn Connection,
    key: &'static str,
}

impl<'conn> SqliteNoteArchive<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            key: NOTES_ARCHIVE_KEY,
        }
    }
}

impl NoteArchive for SqliteNoteArchive<'_> {
    fn load(&self) -> ArchiveResult<Vec<Note>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM archive WHERE key = ?1;",
                [self.key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(blob) = blob else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&blob).map_err(ArchiveError::Deserialize)
    }

    fn store(&self, notes: &[Note]) -> ArchiveResult<()> {
        let blob = serde_json::to_string(notes).map_err(ArchiveError::Serialize)?;

        self.conn.execute(
            "INSERT INTO archive (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key, blob],
        )?;

        Ok(())
    }
}
