//! Game rules expressed as pure functions.

mod hit_points;

pub use hit_points::{
    apply_heal, effective_damage, grant_temporary_hit_points, resolve_damage, DamageResolution,
    HitPointState,
};
