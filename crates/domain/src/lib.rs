//! HP Keeper domain.
//!
//! Pure hit point rules for a single role-playing-game character: damage
//! resolution against resistances and immunities, healing, and temporary hit
//! points. Nothing in this crate performs I/O.

extern crate self as hpkeeper_domain;

pub mod aggregates;
pub mod error;
pub mod events;
pub mod rules;
pub mod value_objects;

pub use aggregates::Character;
pub use error::DomainError;
pub use events::{DamageOutcome, HealOutcome, TemporaryHitPointsOutcome};
pub use rules::{DamageResolution, HitPointState};
pub use value_objects::{CharacterName, DamageType, Defense, DefenseLevel, Defenses};
