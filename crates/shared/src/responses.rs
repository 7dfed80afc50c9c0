//! Response constants.

/// Body returned by the deal-damage endpoint instead of the character state
/// once the character drops to zero hit points or below.
pub const CHARACTER_DEAD_MESSAGE: &str = "Your character is dead!";
