//! Note lifecycle service.
//!
//! # Responsibility
//! - Own the in-memory ordered collection as single source of truth.
//! - Reconcile every mutation with the archive before reporting success.
//!
//! # Invariants
//! - Insertion order is newest-first; create prepends.
//! - At most one note per id; ids are never reused.
//! - In-memory and persisted state never diverge: a failed archive write
//!   leaves the collection unchanged.

use crate::model::note::{validate_draft, Note, NoteId};
use crate::repo::note_archive::{ArchiveError, NoteArchive};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note lifecycle operations.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Draft was empty after trimming; collection is unchanged.
    EmptyDraft,
    /// Persistence failure; collection is unchanged.
    Archive(ArchiveError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDraft => write!(f, "cannot save an empty note"),
            Self::Archive(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyDraft => None,
            Self::Archive(err) => Some(err),
        }
    }
}

impl From<ArchiveError> for NoteServiceError {
    fn from(value: ArchiveError) -> Self {
        Self::Archive(value)
    }
}

/// In-memory note collection reconciled with a persistence archive.
pub struct NoteService<A: NoteArchive> {
    archive: A,
    notes: Vec<Note>,
}

impl<A: NoteArchive> NoteService<A> {
    /// Hydrates the collection from the archive.
    ///
    /// # Contract
    /// - Absent blob starts an empty collection.
    /// - A corrupt blob degrades to an empty collection; the condition is
    ///   logged once and never fails the caller.
    /// - Storage-transport errors during hydration also degrade to empty,
    ///   keeping startup non-fatal.
    pub fn hydrate(archive: A) -> Self {
        let notes = match archive.load() {
            Ok(notes) => notes,
            Err(err) => {
                warn!(
                    "event=notes_hydrate module=service status=fallback_empty error={err}"
                );
                Vec::new()
            }
        };

        info!(
            "event=notes_hydrate module=service status=ok count={}",
            notes.len()
        );

        Self { archive, notes }
    }

    /// Ordered view of the collection, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Creates a note from committed draft text.
    ///
    /// # Contract
    /// - Whitespace-only drafts fail with [`NoteServiceError::EmptyDraft`].
    /// - Content is stored verbatim, untrimmed.
    /// - The new note is prepended and the full collection is persisted
    ///   before this call returns.
    pub fn create_note(&mut self, content: impl Into<String>) -> Result<Note, NoteServiceError> {
        let content = content.into();
        validate_draft(&content).map_err(|_| NoteServiceError::EmptyDraft)?;

        let note = Note::new(content);

        let mut updated = Vec::with_capacity(self.notes.len() + 1);
        updated.push(note.clone());
        updated.extend(self.notes.iter().cloned());

        self.archive.store(&updated)?;
        self.notes = updated;

        info!(
            "event=note_create module=service status=ok id={} count={}",
            note.id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Deletes a note by id.
    ///
    /// # Contract
    /// - Deleting an unknown id is a successful no-op.
    /// - The shrunken collection is persisted before this call returns.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), NoteServiceError> {
        if !self.notes.iter().any(|note| note.id == id) {
            return Ok(());
        }

        let updated = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect::<Vec<_>>();

        self.archive.store(&updated)?;
        self.notes = updated;

        info!(
            "event=note_delete module=service status=ok id={id} count={}",
            self.notes.len()
        );
        Ok(())
    }
}
