//! Domain events returned by aggregate mutations.

mod character_events;

pub use character_events::{DamageOutcome, HealOutcome, TemporaryHitPointsOutcome};
