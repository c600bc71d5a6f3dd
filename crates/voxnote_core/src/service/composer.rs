//! Draft composition use-case.
//!
//! # Responsibility
//! - Own the draft text being composed from typing or transcription.
//! - Manage the recording lifecycle for the active draft.
//!
//! # Invariants
//! - Each applied transcript notification replaces the draft wholesale.
//! - Saving clears the draft only after the note is persisted.
//! - Dropping the composer releases any live recognition session.

use crate::model::note::Note;
use crate::repo::note_archive::NoteArchive;
use crate::service::note_service::{NoteService, NoteServiceError};
use crate::speech::provider::{RecognitionConfig, RecognitionEvent, SpeechError, SpeechProvider};
use crate::speech::recorder::{Recorder, RecorderState};

/// Draft editor bridging typed input, transcription and the note service.
pub struct Composer<P: SpeechProvider> {
    recorder: Recorder<P>,
    draft: String,
}

impl<P: SpeechProvider> Composer<P> {
    /// Creates a composer with default recognition settings.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, RecognitionConfig::default())
    }

    /// Creates a composer with caller-provided recognition settings.
    pub fn with_config(provider: P, config: RecognitionConfig) -> Self {
        Self {
            recorder: Recorder::with_config(provider, config),
            draft: String::new(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft with typed text.
    pub fn set_draft(&mut self, content: impl Into<String>) {
        self.draft = content.into();
    }

    pub fn recording_state(&self) -> RecorderState {
        self.recorder.state()
    }

    /// Starts dictating into the draft.
    ///
    /// Capability-unavailable and duplicate-start failures surface as typed
    /// errors; the draft is untouched either way.
    pub fn start_recording(&mut self) -> Result<(), SpeechError> {
        self.recorder.start()
    }

    /// Stops dictation. Tolerated without a prior start.
    pub fn stop_recording(&mut self) {
        self.recorder.stop();
    }

    /// Applies one recognition notification from the host.
    ///
    /// While recording, the cumulative transcript replaces the draft, so the
    /// draft always reflects the full speech-to-text output observed so far.
    /// On engine error the session ends and the draft keeps its last value.
    pub fn apply_recognition(&mut self, event: RecognitionEvent) {
        let is_transcript = matches!(event, RecognitionEvent::Transcript(_));
        let was_recording = self.recorder.state() == RecorderState::Recording;
        self.recorder.apply_event(event);
        if was_recording && is_transcript {
            self.draft = self.recorder.transcript().to_string();
        }
    }

    /// Commits the draft as a new note.
    ///
    /// On success the draft is cleared; on validation or persistence failure
    /// the draft is preserved for the user to retry.
    pub fn save_note<A: NoteArchive>(
        &mut self,
        notes: &mut NoteService<A>,
    ) -> Result<Note, NoteServiceError> {
        let note = notes.create_note(self.draft.as_str())?;
        self.draft.clear();
        Ok(note)
    }
}
