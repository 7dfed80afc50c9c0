//! Hit point use cases.
//!
//! Every operation follows the same flow: look the character up by name,
//! apply a pure domain rule, persist the new state, return it.

use std::sync::Arc;

use hpkeeper_domain::{Character, DomainError};

use crate::infrastructure::ports::CharacterRepo;

mod deal_damage;
mod error;
mod get_character;
mod heal;
mod temporary_hit_points;

pub use deal_damage::{DamageResult, DealDamage};
pub use error::HitPointsError;
pub use get_character::GetCharacter;
pub use heal::Heal;
pub use temporary_hit_points::GrantTemporaryHitPoints;

/// Container for hit point use cases.
pub struct HitPointsUseCases {
    pub get: Arc<GetCharacter>,
    pub deal_damage: Arc<DealDamage>,
    pub heal: Arc<Heal>,
    pub temporary_hit_points: Arc<GrantTemporaryHitPoints>,
}

impl HitPointsUseCases {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self {
            get: Arc::new(GetCharacter::new(repo.clone())),
            deal_damage: Arc::new(DealDamage::new(repo.clone())),
            heal: Arc::new(Heal::new(repo.clone())),
            temporary_hit_points: Arc::new(GrantTemporaryHitPoints::new(repo)),
        }
    }
}

/// Load a character or fail with `CharacterNotFound`.
async fn load_character(
    repo: &dyn CharacterRepo,
    name: &str,
) -> Result<Character, HitPointsError> {
    match repo.get_by_name(name).await? {
        Some(character) => Ok(character),
        None => {
            tracing::warn!(name = %name, "Character not found");
            Err(HitPointsError::CharacterNotFound(name.to_string()))
        }
    }
}

/// Amounts arrive as signed integers from the wire; the rules take unsigned.
fn non_negative(field: &'static str, value: i32) -> Result<u32, HitPointsError> {
    u32::try_from(value).map_err(|_| {
        HitPointsError::Validation(DomainError::validation(format!(
            "{field} must be non-negative, got {value}"
        )))
    })
}
