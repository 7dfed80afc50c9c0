//! Character-related domain events
//!
//! These enums communicate what happened when character state was modified,
//! allowing callers to react appropriately.

use crate::value_objects::DefenseLevel;

/// Outcome of applying damage to a character
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Nothing got through: immunity, or a zero amount
    NoEffect { defense: Option<DefenseLevel> },
    /// Temporary hit points soaked up all of the damage
    Absorbed {
        absorbed: u32,
        remaining_temporary_hp: u32,
    },
    /// Character lost hit points but is still standing
    Wounded {
        absorbed: u32,
        hit_points_lost: u32,
        remaining_hp: i32,
    },
    /// Character was killed by this damage
    Killed {
        absorbed: u32,
        hit_points_lost: u32,
        remaining_hp: i32,
    },
}

/// Outcome of healing a character
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealOutcome {
    /// Healing applied (no cap)
    Healed { amount_healed: u32, new_hp: i32 },
    /// Zero healing requested
    NoEffect { hp: i32 },
}

/// Outcome of granting temporary hit points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporaryHitPointsOutcome {
    /// The grant was higher than the current buffer and replaced it
    Replaced { from: u32, to: u32 },
    /// The current buffer was at least as high; nothing changed
    Kept { current: u32, proposed: u32 },
}
