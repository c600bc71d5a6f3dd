//! Speech capability contracts.
//!
//! # Responsibility
//! - Describe what core requires from a host speech-to-text engine.
//! - Provide the explicit unsupported implementation for hosts without one.
//!
//! # Invariants
//! - Providers either return a live session or a typed error; there is no
//!   half-started state.
//! - Transcript events carry the cumulative segment list for the session.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recognition settings handed to the provider on session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    /// BCP-47 language tag for the recognition engine.
    pub language: String,
    /// Keep recognizing across pauses instead of stopping on first result.
    pub continuous: bool,
    /// Deliver interim (non-final) transcript segments.
    pub interim_results: bool,
    /// Number of alternative transcripts requested per segment.
    pub max_alternatives: u32,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: "pt-BR".to_string(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

/// One recognized stretch of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    /// Best-alternative text for this segment.
    pub text: String,
    /// Whether the engine may still revise this segment.
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Notification pushed by the host for one active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// All segments observed so far, in order. Replaces earlier snapshots.
    Transcript(Vec<TranscriptSegment>),
    /// Engine failure; the session is unusable afterwards.
    Error(String),
}

/// Handle for one live recognition run.
///
/// `stop` must be idempotent; implementations own the underlying host
/// resource and release it here.
pub trait RecognitionSession {
    fn stop(&mut self);
}

/// Injected host capability for speech-to-text.
pub trait SpeechProvider {
    /// Begins a recognition session, or fails without side effects.
    fn start(
        &self,
        config: &RecognitionConfig,
    ) -> Result<Box<dyn RecognitionSession>, SpeechError>;
}

/// Speech-layer error for capability and session handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// Host exposes no speech-to-text capability.
    Unavailable,
    /// A session is already live on this recorder.
    AlreadyRecording,
    /// Engine reported a runtime failure.
    Engine(String),
}

impl Display for SpeechError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => {
                write!(f, "speech recognition is not available in this environment")
            }
            Self::AlreadyRecording => write!(f, "a recording session is already active"),
            Self::Engine(message) => write!(f, "speech recognition failed: {message}"),
        }
    }
}

impl Error for SpeechError {}

/// Capability implementation for hosts without speech support.
///
/// Always fails with [`SpeechError::Unavailable`], keeping callers on the
/// typed-error path instead of runtime presence checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSpeechProvider;

impl SpeechProvider for UnsupportedSpeechProvider {
    fn start(
        &self,
        _config: &RecognitionConfig,
    ) -> Result<Box<dyn RecognitionSession>, SpeechError> {
        Err(SpeechError::Unavailable)
    }
}
