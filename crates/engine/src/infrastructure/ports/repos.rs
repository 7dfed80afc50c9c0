//! Repository port traits for character storage.

use async_trait::async_trait;
use hpkeeper_domain::Character;

use super::error::RepoError;

/// Storage for characters, keyed by their (unique) name.
///
/// Lookups are exact matches on the trimmed name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Find a character by name. `Ok(None)` when no such character exists.
    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, RepoError>;

    /// Store a new character. Fails with `ConstraintViolation` if the name is taken.
    async fn create(&self, character: &Character) -> Result<(), RepoError>;

    /// Overwrite an existing character. Fails with `NotFound` if it was never created.
    async fn update(&self, character: &Character) -> Result<(), RepoError>;

    /// True when no characters are stored.
    async fn is_empty(&self) -> Result<bool, RepoError>;
}
