//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical `Note` record shared by store, archive and search.
//! - Own draft validation rules applied before a note may exist.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that is never reused.
//! - Notes are immutable after creation; there is no edit-in-place.

pub mod note;
