//! Recording lifecycle state machine.
//!
//! # Responsibility
//! - Own the single live recognition session and its cumulative transcript.
//! - Apply host notifications to the transcript with replace semantics.
//!
//! # Invariants
//! - States are exactly `Idle` and `Recording`.
//! - `stop` is idempotent and may arrive without a prior `start`.
//! - A session acquired by `start` is released on stop, on engine error and
//!   on drop.

use crate::speech::provider::{
    RecognitionConfig, RecognitionEvent, RecognitionSession, SpeechError, SpeechProvider,
};
use log::{error, info};

/// Observable recorder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Recording,
}

/// State machine bridging the injected speech capability to a transcript.
///
/// The host pumps [`RecognitionEvent`]s into [`Recorder::apply_event`]; each
/// transcript notification replaces the whole session transcript, so the
/// caller always observes the full speech-to-text output seen so far.
pub struct Recorder<P: SpeechProvider> {
    provider: P,
    config: RecognitionConfig,
    session: Option<Box<dyn RecognitionSession>>,
    transcript: String,
}

impl<P: SpeechProvider> Recorder<P> {
    /// Creates an idle recorder with default recognition settings.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, RecognitionConfig::default())
    }

    /// Creates an idle recorder with caller-provided settings.
    pub fn with_config(provider: P, config: RecognitionConfig) -> Self {
        Self {
            provider,
            config,
            session: None,
            transcript: String::new(),
        }
    }

    pub fn state(&self) -> RecorderState {
        if self.session.is_some() {
            RecorderState::Recording
        } else {
            RecorderState::Idle
        }
    }

    /// Cumulative transcript of the most recent session.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Begins a recognition session.
    ///
    /// # Contract
    /// - Fails with [`SpeechError::AlreadyRecording`] while a session is live.
    /// - A provider failure leaves the recorder `Idle`.
    /// - A successful start discards the previous session's transcript.
    pub fn start(&mut self) -> Result<(), SpeechError> {
        if self.session.is_some() {
            return Err(SpeechError::AlreadyRecording);
        }

        let session = self.provider.start(&self.config)?;
        self.transcript.clear();
        self.session = Some(session);
        info!(
            "event=recording_start module=speech status=ok language={}",
            self.config.language
        );
        Ok(())
    }

    /// Ends the live session, if any.
    pub fn stop(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
            info!("event=recording_stop module=speech status=ok");
        }
    }

    /// Applies one host notification to the recorder.
    ///
    /// Transcript events replace the session transcript wholesale; error
    /// events force the recorder to `Idle` while preserving whatever
    /// transcript had accumulated. Events arriving while `Idle` are stale
    /// callbacks and are ignored.
    pub fn apply_event(&mut self, event: RecognitionEvent) {
        if self.session.is_none() {
            return;
        }

        match event {
            RecognitionEvent::Transcript(segments) => {
                self.transcript = segments
                    .iter()
                    .map(|segment| segment.text.as_str())
                    .collect();
            }
            RecognitionEvent::Error(message) => {
                error!("event=recording_error module=speech status=error error={message}");
                self.stop();
            }
        }
    }
}

impl<P: SpeechProvider> Drop for Recorder<P> {
    fn drop(&mut self) {
        self.stop();
    }
}
