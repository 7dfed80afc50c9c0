//! Startup seeding.
//!
//! Characters are only seeded into an empty store so a restart with a
//! persistent backend never duplicates or overwrites live state.

use std::sync::Arc;

use hpkeeper_domain::Character;

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// What a seeding attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { count: usize },
    AlreadySeeded,
    NothingToSeed,
}

/// Seed the character store once.
pub struct SeedCharacters {
    repo: Arc<dyn CharacterRepo>,
}

impl SeedCharacters {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, characters: Vec<Character>) -> Result<SeedOutcome, RepoError> {
        if characters.is_empty() {
            return Ok(SeedOutcome::NothingToSeed);
        }
        if !self.repo.is_empty().await? {
            tracing::info!("Character store already populated, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let count = characters.len();
        for character in &characters {
            self.repo.create(character).await?;
            tracing::info!(
                name = %character.name(),
                hit_points = character.hit_points(),
                "Seeded character"
            );
        }

        Ok(SeedOutcome::Seeded { count })
    }
}
