//! Speech-to-text capability boundary and recording lifecycle.
//!
//! # Responsibility
//! - Define the provider contract for the host speech capability.
//! - Drive the Idle/Recording state machine and cumulative transcript.
//!
//! # Invariants
//! - The capability is injected; core never sniffs the host environment.
//! - At most one recognition session is live per recorder.
//! - Sessions are released on every exit path, including drop.

pub mod provider;
pub mod recorder;
