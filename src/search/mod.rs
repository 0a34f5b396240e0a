//! Fuzzy search over the item set.
//!
//! The index is rebuilt after every item mutation and queried by the filter
//! on every applied search. See [`index`] for matching and ranking rules.

pub mod index;

pub use index::SearchIndex;
