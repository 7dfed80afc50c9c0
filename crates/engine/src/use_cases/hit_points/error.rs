//! Hit point operation errors.

use crate::infrastructure::ports::RepoError;
use hpkeeper_domain::DomainError;

/// Errors that can occur during hit point operations.
///
/// None of these leave partial state behind: the new state is computed in
/// full before anything is written.
#[derive(Debug, thiserror::Error)]
pub enum HitPointsError {
    #[error("Invalid damage type: {0}")]
    UnknownDamageType(String),
    #[error("Character with Name {0} not found.")]
    CharacterNotFound(String),
    #[error(transparent)]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
