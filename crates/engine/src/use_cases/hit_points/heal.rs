//! Heal use case.

use std::sync::Arc;

use hpkeeper_domain::{Character, HealOutcome};

use crate::infrastructure::ports::CharacterRepo;

use super::{load_character, non_negative, HitPointsError};

/// Restore hit points. Healing is uncapped and never touches temporary hit points.
pub struct Heal {
    repo: Arc<dyn CharacterRepo>,
}

impl Heal {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    /// Heal the named character by `amount` and persist the result.
    pub async fn execute(&self, name: &str, amount: i32) -> Result<Character, HitPointsError> {
        let amount = non_negative("healAmount", amount)?;
        let mut character = load_character(self.repo.as_ref(), name).await?;

        match character.heal(amount) {
            HealOutcome::Healed {
                amount_healed,
                new_hp,
            } => {
                tracing::info!(name = %character.name(), amount_healed, new_hp, "Character healed");
            }
            HealOutcome::NoEffect { hp } => {
                tracing::debug!(name = %character.name(), hp, "Heal of zero ignored");
            }
        }

        self.repo.update(&character).await?;
        Ok(character)
    }
}
