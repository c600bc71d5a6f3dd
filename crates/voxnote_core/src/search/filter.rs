//! Case-insensitive substring filter.
//!
//! # Responsibility
//! - Narrow the visible note set for a filter query.
//!
//! # Invariants
//! - Pure function of its inputs; no state, no side effects.
//! - Relative note order is preserved in the result.
//! - The exact empty query returns the full set; the query is not trimmed.

use crate::model::note::Note;

/// Returns the subset of `notes` whose content contains `query`.
///
/// Matching is a literal substring test over case-folded text
/// (`str::to_lowercase`, locale-naive, no Unicode normalization), so accented
/// content matches only queries carrying the same accents.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.content.to_lowercase().contains(&needle))
        .collect()
}
