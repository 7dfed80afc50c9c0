//! Value objects - Immutable objects defined by their attributes

mod damage_type;
mod defense;
mod names;

pub use damage_type::DamageType;
pub use defense::{Defense, DefenseLevel, Defenses};
pub use names::CharacterName;
