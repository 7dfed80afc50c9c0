//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::CharacterRepo;
use crate::use_cases::{HitPointsUseCases, SeedCharacters};

/// Main application state.
///
/// Holds the repositories and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for repository ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub hit_points: HitPointsUseCases,
    pub seed: Arc<SeedCharacters>,
}

impl App {
    /// Wire every use case onto the given character store.
    pub fn new(character: Arc<dyn CharacterRepo>) -> Self {
        let use_cases = UseCases {
            hit_points: HitPointsUseCases::new(character.clone()),
            seed: Arc::new(SeedCharacters::new(character.clone())),
        };

        Self {
            repositories: Repositories { character },
            use_cases,
        }
    }
}
