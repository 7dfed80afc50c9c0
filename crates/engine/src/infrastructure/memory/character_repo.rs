//! In-memory character storage
//!
//! A `HashMap` behind a tokio `RwLock`. Each call is atomic on its own, but
//! a load-modify-save sequence spanning several calls is not isolated:
//! concurrent writers to the same name race and the last write wins. Data
//! lives only as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use hpkeeper_domain::Character;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// In-memory implementation of `CharacterRepo`.
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    characters: RwLock<HashMap<String, Character>>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored characters.
    pub async fn count(&self) -> usize {
        self.characters.read().await.len()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, RepoError> {
        let characters = self.characters.read().await;
        Ok(characters.get(name.trim()).cloned())
    }

    async fn create(&self, character: &Character) -> Result<(), RepoError> {
        let mut characters = self.characters.write().await;
        let key = character.name().as_str();
        if characters.contains_key(key) {
            return Err(RepoError::constraint(format!(
                "Character with name {} already exists",
                key
            )));
        }
        characters.insert(key.to_string(), character.clone());
        Ok(())
    }

    async fn update(&self, character: &Character) -> Result<(), RepoError> {
        let mut characters = self.characters.write().await;
        match characters.get_mut(character.name().as_str()) {
            Some(stored) => {
                *stored = character.clone();
                Ok(())
            }
            None => Err(RepoError::not_found("Character", character.name())),
        }
    }

    async fn is_empty(&self) -> Result<bool, RepoError> {
        Ok(self.characters.read().await.is_empty())
    }
}
