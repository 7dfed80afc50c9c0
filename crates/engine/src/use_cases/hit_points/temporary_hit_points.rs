//! Grant temporary hit points use case.

use std::sync::Arc;

use hpkeeper_domain::{Character, TemporaryHitPointsOutcome};

use crate::infrastructure::ports::CharacterRepo;

use super::{load_character, non_negative, HitPointsError};

/// Grant temporary hit points. Grants do not stack: the higher value wins.
pub struct GrantTemporaryHitPoints {
    repo: Arc<dyn CharacterRepo>,
}

impl GrantTemporaryHitPoints {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, name: &str, amount: i32) -> Result<Character, HitPointsError> {
        let amount = non_negative("tempHPAmount", amount)?;
        let mut character = load_character(self.repo.as_ref(), name).await?;

        match character.grant_temporary_hit_points(amount) {
            TemporaryHitPointsOutcome::Replaced { from, to } => {
                tracing::info!(name = %character.name(), from, to, "Temporary hit points replaced");
            }
            TemporaryHitPointsOutcome::Kept { current, proposed } => {
                tracing::debug!(
                    name = %character.name(),
                    current,
                    proposed,
                    "Existing temporary hit points kept"
                );
            }
        }

        self.repo.update(&character).await?;
        Ok(character)
    }
}
