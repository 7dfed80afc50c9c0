//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod hit_points;
pub mod seed;

pub use hit_points::HitPointsUseCases;
pub use seed::{SeedCharacters, SeedOutcome};
