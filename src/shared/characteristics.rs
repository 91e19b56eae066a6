//! Free-form product attributes.
//!
//! Characteristics are an ordered map from attribute name to a scalar value.
//! They are stored as a JSONB document and passed through services untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacteristicValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

#[cfg(test)]
impl From<&str> for CharacteristicValue {
    fn from(value: &str) -> Self {
        CharacteristicValue::Text(value.to_string())
    }
}

#[cfg(test)]
impl From<bool> for CharacteristicValue {
    fn from(value: bool) -> Self {
        CharacteristicValue::Bool(value)
    }
}

#[cfg(test)]
impl From<i64> for CharacteristicValue {
    fn from(value: i64) -> Self {
        CharacteristicValue::Number(value.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Characteristics(BTreeMap<String, CharacteristicValue>);

impl Characteristics {
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

/// Builders and accessors for tests; requests fill the map through serde
#[cfg(test)]
impl Characteristics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CharacteristicValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&CharacteristicValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl<K, V> FromIterator<(K, V)> for Characteristics
where
    K: Into<String>,
    V: Into<CharacteristicValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Attribute names must not be blank
pub fn validate_characteristics(value: &Characteristics) -> Result<(), ValidationError> {
    if value.keys().any(|key| key.trim().is_empty()) {
        let mut error = ValidationError::new("blank_key");
        error.message = Some("characteristic names must not be blank".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_scalar_values() {
        let value = json!({
            "CPU": "Snapdragon",
            "cores": 8,
            "weight": 0.2,
            "nfc": true,
            "jack": null
        });

        let parsed: Characteristics = serde_json::from_value(value).unwrap();

        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed.get("CPU"), Some(&CharacteristicValue::from("Snapdragon")));
        assert_eq!(parsed.get("cores"), Some(&CharacteristicValue::from(8_i64)));
        assert_eq!(parsed.get("nfc"), Some(&CharacteristicValue::Bool(true)));
        assert_eq!(parsed.get("jack"), Some(&CharacteristicValue::Null));
        assert!(matches!(
            parsed.get("weight"),
            Some(CharacteristicValue::Number(_))
        ));
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let value = json!({ "ports": ["usb-c", "jack"] });
        assert!(serde_json::from_value::<Characteristics>(value).is_err());
    }

    #[test]
    fn test_serializes_keys_in_order() {
        let characteristics: Characteristics =
            [("RAM", "6GB"), ("CPU", "Snapdragon")].into_iter().collect();

        let text = serde_json::to_string(&characteristics).unwrap();

        assert_eq!(text, r#"{"CPU":"Snapdragon","RAM":"6GB"}"#);
    }

    #[test]
    fn test_blank_key_fails_validation() {
        let mut characteristics = Characteristics::new();
        characteristics.insert("  ", "value");

        assert!(validate_characteristics(&characteristics).is_err());
        assert!(validate_characteristics(&Characteristics::new()).is_ok());
    }
}
