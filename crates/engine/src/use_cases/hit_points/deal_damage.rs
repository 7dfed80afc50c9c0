//! Deal damage use case.
//!
//! Resolves damage against the character's defenses and temporary hit points.

use std::sync::Arc;

use hpkeeper_domain::{Character, DamageOutcome, DamageType};

use crate::infrastructure::ports::CharacterRepo;

use super::{load_character, non_negative, HitPointsError};

/// Character state after damage was dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageResult {
    pub character: Character,
    pub outcome: DamageOutcome,
}

impl DamageResult {
    /// True when the character ended at zero hit points or below.
    pub fn is_dead(&self) -> bool {
        self.character.is_dead()
    }
}

/// Deal damage use case.
///
/// Orchestrates: damage type parsing, character lookup, damage resolution, persistence.
pub struct DealDamage {
    repo: Arc<dyn CharacterRepo>,
}

impl DealDamage {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    /// Execute the deal damage use case.
    ///
    /// # Arguments
    /// * `name` - The character taking the damage
    /// * `amount` - Raw damage before defenses, must be non-negative
    /// * `damage_type` - Damage type name, matched case-insensitively
    ///
    /// # Returns
    /// * `Ok(DamageResult)` - Damage applied and persisted (the character may be dead)
    /// * `Err(HitPointsError)` - Nothing was written
    pub async fn execute(
        &self,
        name: &str,
        amount: i32,
        damage_type: &str,
    ) -> Result<DamageResult, HitPointsError> {
        let damage_type: DamageType = damage_type.parse().map_err(|_| {
            tracing::warn!(damage_type = %damage_type, "Invalid damage type");
            HitPointsError::UnknownDamageType(damage_type.to_string())
        })?;
        let amount = non_negative("damageAmount", amount)?;

        let mut character = load_character(self.repo.as_ref(), name).await?;
        let outcome = character.apply_damage(amount, damage_type);

        match &outcome {
            DamageOutcome::NoEffect { defense } => {
                tracing::info!(
                    name = %character.name(),
                    damage_type = %damage_type,
                    defense = ?defense,
                    "No damage taken"
                );
            }
            DamageOutcome::Absorbed {
                absorbed,
                remaining_temporary_hp,
            } => {
                tracing::info!(
                    name = %character.name(),
                    absorbed,
                    remaining_temporary_hp,
                    "Damage fully absorbed by temporary hit points"
                );
            }
            DamageOutcome::Wounded {
                absorbed,
                hit_points_lost,
                remaining_hp,
            } => {
                tracing::info!(
                    name = %character.name(),
                    absorbed,
                    hit_points_lost,
                    remaining_hp,
                    "Character wounded"
                );
            }
            DamageOutcome::Killed {
                absorbed,
                hit_points_lost,
                remaining_hp,
            } => {
                tracing::info!(
                    name = %character.name(),
                    absorbed,
                    hit_points_lost,
                    remaining_hp,
                    "Character killed"
                );
            }
        }

        self.repo.update(&character).await.map_err(|e| {
            tracing::error!(error = %e, name = %character.name(), "Failed to save damaged character");
            e
        })?;

        Ok(DamageResult { character, outcome })
    }
}
