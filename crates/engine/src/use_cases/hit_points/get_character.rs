//! Get character use case.

use std::sync::Arc;

use hpkeeper_domain::Character;

use crate::infrastructure::ports::CharacterRepo;

use super::{load_character, HitPointsError};

/// Read-only lookup of a character's current state.
pub struct GetCharacter {
    repo: Arc<dyn CharacterRepo>,
}

impl GetCharacter {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, name: &str) -> Result<Character, HitPointsError> {
        load_character(self.repo.as_ref(), name).await
    }
}
