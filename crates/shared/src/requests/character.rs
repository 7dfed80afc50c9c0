use serde::{Deserialize, Serialize};

/// Body of `POST /api/characters/deal-damage`.
///
/// `damage_type` stays a string here so an unknown type surfaces as a domain
/// error with a readable message instead of a generic body rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealDamageRequest {
    pub name: String,
    pub damage_amount: i32,
    pub damage_type: String,
}

/// Body of `POST /api/characters/heal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealRequest {
    pub name: String,
    pub heal_amount: i32,
}

/// Body of `POST /api/characters/add-temporary-hp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryHpRequest {
    pub name: String,
    #[serde(rename = "tempHPAmount", alias = "tempHpAmount")]
    pub temp_hp_amount: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_damage_request_uses_camel_case() {
        let request: DealDamageRequest = serde_json::from_str(
            r#"{"name":"Briv","damageAmount":12,"damageType":"Fire"}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            DealDamageRequest {
                name: "Briv".into(),
                damage_amount: 12,
                damage_type: "Fire".into(),
            }
        );
    }

    #[test]
    fn temporary_hp_request_accepts_both_spellings() {
        let upper: TemporaryHpRequest =
            serde_json::from_str(r#"{"name":"Briv","tempHPAmount":8}"#).unwrap();
        let camel: TemporaryHpRequest =
            serde_json::from_str(r#"{"name":"Briv","tempHpAmount":8}"#).unwrap();
        assert_eq!(upper, camel);
        assert_eq!(upper.temp_hp_amount, 8);
    }

    #[test]
    fn heal_request_requires_amount() {
        assert!(serde_json::from_str::<HealRequest>(r#"{"name":"Briv"}"#).is_err());
    }
}
