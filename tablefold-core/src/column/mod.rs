//! In-memory filter column.
//!
//! The consumer side of the search hooks: cells go in through the folding
//! hook for the column's slot, queries are folded the same way, and matching
//! is a plain substring test per whitespace-separated term.
//!
//! Threading:
//! - [`FilterColumn`] reuses internal buffers across calls and takes
//!   `&mut self` for writes and searches.

mod api;
mod search;
mod stats;
mod types;

pub use types::FilterColumn;
