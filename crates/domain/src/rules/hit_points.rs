//! Hit point rules: damage resolution, healing and temporary hit points.
//!
//! Every function here is pure. Callers load the current state, apply a rule
//! and persist the returned state.

use crate::value_objects::{DamageType, DefenseLevel, Defenses};

/// The mutable part of a character's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPointState {
    /// Permanent hit points. May be zero or negative; there is no maximum.
    pub hit_points: i32,
    /// Buffer consumed before `hit_points` when damage is taken.
    pub temporary_hit_points: u32,
}

impl HitPointState {
    pub fn new(hit_points: i32, temporary_hit_points: u32) -> Self {
        Self {
            hit_points,
            temporary_hit_points,
        }
    }

    /// A character is dead once hit points reach zero or below.
    pub fn is_dead(&self) -> bool {
        self.hit_points <= 0
    }
}

/// Result of resolving one instance of damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageResolution {
    /// State after the damage was applied.
    pub state: HitPointState,
    /// The defense that matched the damage type, if any.
    pub defense: Option<DefenseLevel>,
    /// Damage left after resistance or immunity.
    pub effective_damage: u32,
    /// Portion of `effective_damage` soaked up by temporary hit points.
    pub absorbed: u32,
    /// Portion of `effective_damage` taken off permanent hit points.
    pub hit_points_lost: u32,
}

impl DamageResolution {
    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }
}

/// Damage that gets past an optional defense.
pub fn effective_damage(amount: u32, defense: Option<DefenseLevel>) -> u32 {
    match defense {
        Some(level) => level.mitigate(amount),
        None => amount,
    }
}

/// Resolve `amount` points of `damage_type` damage against `state`.
///
/// Temporary hit points absorb damage first. Whatever they cannot absorb is
/// taken off permanent hit points, and temporary hit points drop to zero.
///
/// ```
/// use hpkeeper_domain::{rules, DamageType, Defense, Defenses, HitPointState};
///
/// let defenses: Defenses = [Defense::resistance(DamageType::Fire)].into_iter().collect();
/// let state = HitPointState::new(20, 10);
///
/// let hit = rules::resolve_damage(state, &defenses, 30, DamageType::Fire);
/// assert_eq!(hit.effective_damage, 15);
/// assert_eq!(hit.state, HitPointState::new(15, 0));
/// assert!(!hit.is_dead());
/// ```
pub fn resolve_damage(
    state: HitPointState,
    defenses: &Defenses,
    amount: u32,
    damage_type: DamageType,
) -> DamageResolution {
    let defense = defenses.get(damage_type);
    let damage = effective_damage(amount, defense);

    let (temporary_hit_points, absorbed, hit_points_lost) = if state.temporary_hit_points > 0 {
        if damage <= state.temporary_hit_points {
            (state.temporary_hit_points - damage, damage, 0)
        } else {
            (
                0,
                state.temporary_hit_points,
                damage - state.temporary_hit_points,
            )
        }
    } else {
        (0, 0, damage)
    };

    DamageResolution {
        state: HitPointState {
            hit_points: state.hit_points.saturating_sub_unsigned(hit_points_lost),
            temporary_hit_points,
        },
        defense,
        effective_damage: damage,
        absorbed,
        hit_points_lost,
    }
}

/// Add `amount` to `hit_points`. Healing has no upper bound.
pub fn apply_heal(hit_points: i32, amount: u32) -> i32 {
    hit_points.saturating_add_unsigned(amount)
}

/// Temporary hit points do not stack: the larger of the two values wins.
pub fn grant_temporary_hit_points(current: u32, proposed: u32) -> u32 {
    current.max(proposed)
}
