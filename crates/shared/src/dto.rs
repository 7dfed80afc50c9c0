//! Character wire format.
//!
//! The same shape is used for API responses and for the seed fixture:
//!
//! ```json
//! {
//!   "name": "Briv",
//!   "hitPoints": 25,
//!   "tempHP": 0,
//!   "defenses": [{ "type": "fire", "defense": "immunity" }]
//! }
//! ```
//!
//! Fixture files may carry extra fields (level, classes, stats, items); they
//! are ignored.

use serde::{Deserialize, Serialize};

use hpkeeper_domain::{
    Character, CharacterName, DamageType, Defense, DefenseLevel, Defenses, DomainError,
};

/// One defense entry on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseData {
    #[serde(rename = "type")]
    pub damage_type: DamageType,
    pub defense: DefenseLevel,
}

/// Serialized character state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterData {
    pub name: String,
    pub hit_points: i32,
    #[serde(
        rename = "tempHP",
        alias = "tempHp",
        alias = "temporaryHitPoints",
        default
    )]
    pub temp_hp: u32,
    #[serde(default)]
    pub defenses: Vec<DefenseData>,
}

impl CharacterData {
    /// Validate the wire data and build a domain character.
    ///
    /// Duplicate defense entries collapse to the last one listed.
    pub fn into_domain(self) -> Result<Character, DomainError> {
        let name = CharacterName::new(self.name)?;
        let defenses: Defenses = self
            .defenses
            .into_iter()
            .map(|d| Defense::new(d.damage_type, d.defense))
            .collect();

        Ok(Character::new(name, self.hit_points)
            .with_temporary_hit_points(self.temp_hp)
            .with_defenses(defenses))
    }
}

impl From<&Character> for CharacterData {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name().to_string(),
            hit_points: character.hit_points(),
            temp_hp: character.temporary_hit_points(),
            defenses: character
                .defenses()
                .iter()
                .map(|d| DefenseData {
                    damage_type: d.damage_type,
                    defense: d.level,
                })
                .collect(),
        }
    }
}

impl TryFrom<CharacterData> for Character {
    type Error = DomainError;

    fn try_from(data: CharacterData) -> Result<Self, Self::Error> {
        data.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_public_shape() {
        let character = Character::new(CharacterName::new("Rob").unwrap(), 20)
            .with_temporary_hit_points(10)
            .with_defense(Defense::immunity(DamageType::Force))
            .with_defense(Defense::resistance(DamageType::Fire));

        let value = serde_json::to_value(CharacterData::from(&character)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Rob",
                "hitPoints": 20,
                "tempHP": 10,
                "defenses": [
                    { "type": "fire", "defense": "resistance" },
                    { "type": "force", "defense": "immunity" }
                ]
            })
        );
    }

    #[test]
    fn parses_fixture_with_extra_fields_and_mixed_case() {
        let data: CharacterData = serde_json::from_value(json!({
            "name": "Briv",
            "level": 5,
            "hitPoints": 25,
            "classes": [{ "name": "fighter", "hitDiceValue": 10, "classLevel": 5 }],
            "defenses": [
                { "type": "Fire", "defense": "Immunity" },
                { "type": "slashing", "defense": "resistance" }
            ]
        }))
        .unwrap();

        assert_eq!(data.temp_hp, 0);
        let character = data.into_domain().unwrap();
        assert_eq!(character.name().as_str(), "Briv");
        assert_eq!(character.hit_points(), 25);
        assert_eq!(
            character.defenses().get(DamageType::Fire),
            Some(DefenseLevel::Immunity)
        );
        assert_eq!(
            character.defenses().get(DamageType::Slashing),
            Some(DefenseLevel::Resistance)
        );
    }

    #[test]
    fn accepts_temp_hp_aliases() {
        for key in ["tempHP", "tempHp", "temporaryHitPoints"] {
            let data: CharacterData = serde_json::from_value(json!({
                "name": "Briv",
                "hitPoints": 25,
                key: 7
            }))
            .unwrap();
            assert_eq!(data.temp_hp, 7, "key {key}");
        }
    }

    #[test]
    fn rejects_unknown_damage_type() {
        let result = serde_json::from_value::<CharacterData>(json!({
            "name": "Briv",
            "hitPoints": 25,
            "defenses": [{ "type": "plasma", "defense": "immunity" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_temp_hp() {
        let result = serde_json::from_value::<CharacterData>(json!({
            "name": "Briv",
            "hitPoints": 25,
            "tempHP": -1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn blank_name_fails_domain_validation() {
        let data = CharacterData {
            name: "  ".into(),
            hit_points: 1,
            temp_hp: 0,
            defenses: vec![],
        };
        assert!(matches!(
            Character::try_from(data),
            Err(DomainError::Validation(_))
        ));
    }
}
