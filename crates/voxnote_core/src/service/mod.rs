//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate archive and speech calls into use-case level APIs.
//! - Keep UI layers decoupled from storage and capability details.

pub mod composer;
pub mod note_service;
