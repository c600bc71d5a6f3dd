//! Core domain logic for voxnote.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod speech;

pub use logging::{default_log_level, init_logging};
pub use model::note::{DraftValidationError, Note, NoteId};
pub use repo::note_archive::{
    ArchiveError, ArchiveResult, NoteArchive, SqliteNoteArchive, NOTES_ARCHIVE_KEY,
};
pub use search::filter::filter_notes;
pub use service::composer::Composer;
pub use service::note_service::{NoteService, NoteServiceError};
pub use speech::provider::{
    RecognitionConfig, RecognitionEvent, RecognitionSession, SpeechError, SpeechProvider,
    TranscriptSegment, UnsupportedSpeechProvider,
};
pub use speech::recorder::{Recorder, RecorderState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
