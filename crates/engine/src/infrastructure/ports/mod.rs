//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character storage (in-memory today, could swap for a database)

mod error;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::CharacterRepo;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockCharacterRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
