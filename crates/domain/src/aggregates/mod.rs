//! Aggregates - consistency boundaries for domain state.

mod character;

pub use character::Character;
