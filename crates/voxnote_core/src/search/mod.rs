//! Search entry points over the in-memory collection.
//!
//! # Responsibility
//! - Expose the substring filter used for type-as-you-search narrowing.
//! - Keep result shaping inside core.

pub mod filter;
