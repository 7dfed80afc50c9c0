//! Defense value objects - how a character mitigates a damage type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::DamageType;
use crate::error::DomainError;

/// How strongly a character is protected against one damage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DefenseLevel {
    /// Incoming damage is halved, rounding down.
    Resistance,
    /// Incoming damage is ignored entirely.
    Immunity,
}

impl DefenseLevel {
    /// Every defense level, in the order used for lookup.
    pub const ALL: [DefenseLevel; 2] = [Self::Resistance, Self::Immunity];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resistance => "resistance",
            Self::Immunity => "immunity",
        }
    }

    /// Damage that gets through this defense.
    ///
    /// ```
    /// use hpkeeper_domain::DefenseLevel;
    ///
    /// assert_eq!(DefenseLevel::Resistance.mitigate(7), 3);
    /// assert_eq!(DefenseLevel::Immunity.mitigate(7), 0);
    /// ```
    pub fn mitigate(&self, amount: u32) -> u32 {
        match self {
            Self::Resistance => amount / 2,
            Self::Immunity => 0,
        }
    }
}

impl fmt::Display for DefenseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefenseLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::parse(format!("Unknown defense type: {}", s)))
    }
}

impl TryFrom<String> for DefenseLevel {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DefenseLevel> for String {
    fn from(level: DefenseLevel) -> String {
        level.as_str().to_string()
    }
}

/// A single defense entry: one damage type paired with one defense level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Defense {
    pub damage_type: DamageType,
    pub level: DefenseLevel,
}

impl Defense {
    pub fn new(damage_type: DamageType, level: DefenseLevel) -> Self {
        Self { damage_type, level }
    }

    pub fn resistance(damage_type: DamageType) -> Self {
        Self::new(damage_type, DefenseLevel::Resistance)
    }

    pub fn immunity(damage_type: DamageType) -> Self {
        Self::new(damage_type, DefenseLevel::Immunity)
    }
}

/// A character's defenses, keyed by damage type.
///
/// # Invariants
///
/// - At most one defense level per damage type. Inserting an entry for a
///   damage type that is already present replaces the old level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defenses(BTreeMap<DamageType, DefenseLevel>);

impl Defenses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `defense.damage_type`.
    ///
    /// Returns the level that was replaced, if any.
    pub fn insert(&mut self, defense: Defense) -> Option<DefenseLevel> {
        self.0.insert(defense.damage_type, defense.level)
    }

    pub fn get(&self, damage_type: DamageType) -> Option<DefenseLevel> {
        self.0.get(&damage_type).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries ordered by damage type.
    pub fn iter(&self) -> impl Iterator<Item = Defense> + '_ {
        self.0
            .iter()
            .map(|(damage_type, level)| Defense::new(*damage_type, *level))
    }
}

impl FromIterator<Defense> for Defenses {
    fn from_iter<I: IntoIterator<Item = Defense>>(iter: I) -> Self {
        let mut defenses = Self::new();
        for defense in iter {
            defenses.insert(defense);
        }
        defenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defense_level_from_str_ignores_case() {
        assert_eq!("immunity".parse::<DefenseLevel>(), Ok(DefenseLevel::Immunity));
        assert_eq!("Resistance".parse::<DefenseLevel>(), Ok(DefenseLevel::Resistance));
        assert_eq!("IMMUNITY".parse::<DefenseLevel>(), Ok(DefenseLevel::Immunity));
    }

    #[test]
    fn test_defense_level_from_str_rejects_unknown() {
        let err = "vulnerability".parse::<DefenseLevel>().unwrap_err();
        assert_eq!(err, DomainError::parse("Unknown defense type: vulnerability"));
    }

    #[test]
    fn test_resistance_truncates_odd_amounts() {
        assert_eq!(DefenseLevel::Resistance.mitigate(0), 0);
        assert_eq!(DefenseLevel::Resistance.mitigate(1), 0);
        assert_eq!(DefenseLevel::Resistance.mitigate(9), 4);
        assert_eq!(DefenseLevel::Resistance.mitigate(10), 5);
    }

    #[test]
    fn test_immunity_blocks_everything() {
        assert_eq!(DefenseLevel::Immunity.mitigate(u32::MAX), 0);
    }

    #[test]
    fn test_defense_level_serde_uses_lowercase() {
        let json = serde_json::to_string(&DefenseLevel::Resistance).unwrap();
        assert_eq!(json, "\"resistance\"");
        let parsed: DefenseLevel = serde_json::from_str("\"Immunity\"").unwrap();
        assert_eq!(parsed, DefenseLevel::Immunity);
    }

    #[test]
    fn test_defenses_keep_one_entry_per_damage_type() {
        let defenses: Defenses = [
            Defense::resistance(DamageType::Fire),
            Defense::immunity(DamageType::Force),
            Defense::immunity(DamageType::Fire),
        ]
        .into_iter()
        .collect();

        assert_eq!(defenses.len(), 2);
        assert_eq!(defenses.get(DamageType::Fire), Some(DefenseLevel::Immunity));
        assert_eq!(defenses.get(DamageType::Force), Some(DefenseLevel::Immunity));
        assert_eq!(defenses.get(DamageType::Cold), None);
    }

    #[test]
    fn test_insert_returns_replaced_level() {
        let mut defenses = Defenses::new();
        assert!(defenses.is_empty());
        assert_eq!(defenses.insert(Defense::resistance(DamageType::Acid)), None);
        assert_eq!(
            defenses.insert(Defense::immunity(DamageType::Acid)),
            Some(DefenseLevel::Resistance)
        );
    }

    #[test]
    fn test_iter_is_ordered_by_damage_type() {
        let defenses: Defenses = [
            Defense::resistance(DamageType::Thunder),
            Defense::immunity(DamageType::Acid),
        ]
        .into_iter()
        .collect();

        let types: Vec<DamageType> = defenses.iter().map(|d| d.damage_type).collect();
        assert_eq!(types, vec![DamageType::Acid, DamageType::Thunder]);
    }
}
