//! Character aggregate - a named creature with hit points and defenses
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `CharacterName` for the validated name, `Defenses` for the
//!   one-entry-per-damage-type map
//! - **Domain events**: Mutations return outcome enums (`DamageOutcome`, etc.)
//! - **Pure rules**: the arithmetic lives in `crate::rules`; the aggregate only
//!   applies the resulting state

use crate::events::{DamageOutcome, HealOutcome, TemporaryHitPointsOutcome};
use crate::rules::{self, HitPointState};
use crate::value_objects::{CharacterName, DamageType, Defense, Defenses};

/// A character whose hit points are tracked.
///
/// # Invariants
///
/// - `name` is always non-empty and <= 200 characters (enforced by `CharacterName`)
/// - Temporary hit points are never negative (unsigned)
/// - At most one defense per damage type (enforced by `Defenses`)
///
/// # Example
///
/// ```
/// use hpkeeper_domain::{Character, CharacterName, DamageType, Defense};
///
/// let name = CharacterName::new("Briv").unwrap();
/// let character = Character::new(name, 25)
///     .with_temporary_hit_points(5)
///     .with_defense(Defense::immunity(DamageType::Fire));
///
/// assert_eq!(character.name().as_str(), "Briv");
/// assert_eq!(character.hit_points(), 25);
/// assert!(!character.is_dead());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: CharacterName,
    hit_points: i32,
    temporary_hit_points: u32,
    defenses: Defenses,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a character with no temporary hit points and no defenses.
    pub fn new(name: CharacterName, hit_points: i32) -> Self {
        Self {
            name,
            hit_points,
            temporary_hit_points: 0,
            defenses: Defenses::new(),
        }
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    pub fn with_temporary_hit_points(mut self, temporary_hit_points: u32) -> Self {
        self.temporary_hit_points = temporary_hit_points;
        self
    }

    /// Add a defense, replacing any existing entry for the same damage type.
    pub fn with_defense(mut self, defense: Defense) -> Self {
        self.defenses.insert(defense);
        self
    }

    pub fn with_defenses(mut self, defenses: Defenses) -> Self {
        self.defenses = defenses;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn temporary_hit_points(&self) -> u32 {
        self.temporary_hit_points
    }

    pub fn defenses(&self) -> &Defenses {
        &self.defenses
    }

    pub fn hit_point_state(&self) -> HitPointState {
        HitPointState::new(self.hit_points, self.temporary_hit_points)
    }

    /// Dead means zero or fewer hit points.
    pub fn is_dead(&self) -> bool {
        self.hit_point_state().is_dead()
    }

    // =========================================================================
    // Mutation Methods (return domain events)
    // =========================================================================

    /// Apply damage of a given type to the character.
    ///
    /// Returns a `DamageOutcome` indicating what happened:
    /// - `NoEffect` if immunity (or a zero amount) stopped everything
    /// - `Absorbed` if temporary hit points took the whole hit
    /// - `Wounded` if hit points dropped but stayed above zero
    /// - `Killed` if hit points dropped to zero or below
    ///
    /// # Example
    ///
    /// ```
    /// use hpkeeper_domain::{Character, CharacterName, DamageOutcome, DamageType};
    ///
    /// let name = CharacterName::new("Rob").unwrap();
    /// let mut character = Character::new(name, 20).with_temporary_hit_points(10);
    ///
    /// match character.apply_damage(20, DamageType::Thunder) {
    ///     DamageOutcome::Wounded { absorbed, hit_points_lost, remaining_hp } => {
    ///         assert_eq!(absorbed, 10);
    ///         assert_eq!(hit_points_lost, 10);
    ///         assert_eq!(remaining_hp, 10);
    ///     }
    ///     other => panic!("Expected Wounded outcome, got {other:?}"),
    /// }
    /// ```
    pub fn apply_damage(&mut self, amount: u32, damage_type: DamageType) -> DamageOutcome {
        let hit = rules::resolve_damage(self.hit_point_state(), &self.defenses, amount, damage_type);

        self.hit_points = hit.state.hit_points;
        self.temporary_hit_points = hit.state.temporary_hit_points;

        if hit.effective_damage == 0 {
            DamageOutcome::NoEffect {
                defense: hit.defense,
            }
        } else if hit.hit_points_lost == 0 {
            DamageOutcome::Absorbed {
                absorbed: hit.absorbed,
                remaining_temporary_hp: hit.state.temporary_hit_points,
            }
        } else if hit.is_dead() {
            DamageOutcome::Killed {
                absorbed: hit.absorbed,
                hit_points_lost: hit.hit_points_lost,
                remaining_hp: hit.state.hit_points,
            }
        } else {
            DamageOutcome::Wounded {
                absorbed: hit.absorbed,
                hit_points_lost: hit.hit_points_lost,
                remaining_hp: hit.state.hit_points,
            }
        }
    }

    /// Heal the character. There is no maximum, so every point is applied.
    pub fn heal(&mut self, amount: u32) -> HealOutcome {
        if amount == 0 {
            return HealOutcome::NoEffect {
                hp: self.hit_points,
            };
        }

        self.hit_points = rules::apply_heal(self.hit_points, amount);
        HealOutcome::Healed {
            amount_healed: amount,
            new_hp: self.hit_points,
        }
    }

    /// Grant temporary hit points. Grants do not stack; the higher value is kept.
    pub fn grant_temporary_hit_points(&mut self, proposed: u32) -> TemporaryHitPointsOutcome {
        let current = self.temporary_hit_points;
        let granted = rules::grant_temporary_hit_points(current, proposed);

        if granted == current {
            return TemporaryHitPointsOutcome::Kept { current, proposed };
        }

        self.temporary_hit_points = granted;
        TemporaryHitPointsOutcome::Replaced {
            from: current,
            to: granted,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
