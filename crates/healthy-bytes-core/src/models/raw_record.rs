// ABOUTME: Untyped nutrition record as returned by the open food product lookup
// ABOUTME: Tolerant accessors that treat missing, null, and non-numeric fields as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names consumed from the raw nutrition record
pub mod fields {
    /// Energy in kcal per serving
    pub const ENERGY_KCAL_SERVING: &str = "energy_kcal_serving";
    /// Energy in kcal per 100g
    pub const ENERGY_KCAL_100G: &str = "energy_kcal_100g";
    /// Energy per serving in the declared (or undeclared) unit
    pub const ENERGY_SERVING: &str = "energy_serving";
    /// Energy per 100g in the declared (or undeclared) unit
    pub const ENERGY_100G: &str = "energy_100g";
    /// Declared energy unit ("kj" or "kcal")
    pub const ENERGY_UNIT: &str = "energy_unit";
    /// Calories per serving (common on US labels)
    pub const CALORIES_SERVING: &str = "calories_serving";
    /// Calories per 100g
    pub const CALORIES_100G: &str = "calories_100g";
    /// Suffix for per-serving nutrient fields
    pub const SERVING_SUFFIX: &str = "_serving";
    /// Suffix for per-100g nutrient fields
    pub const PER_100G_SUFFIX: &str = "_100g";
}

/// Leading decimal number, optionally signed, with an optional exponent
static LEADING_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").ok()
});

/// Nutrition record with arbitrary fields and loosely typed values
///
/// No schema is enforced upstream. Every accessor treats missing keys,
/// `null`, booleans, and unparseable strings as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawNutritionRecord {
    fields: Map<String, Value>,
}

impl RawNutritionRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from any JSON value; non-objects yield an empty record
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw field access
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Numeric value of a field, if one can be derived
    ///
    /// Numbers are taken as-is. Strings contribute their leading decimal
    /// number ("12.5 g" reads as 12.5). Non-finite results are discarded.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        let value = match self.fields.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_leading_number(s),
            _ => None,
        }?;
        value.is_finite().then_some(value)
    }

    /// String value of a field; non-string values are absent
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Number of fields present
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for RawNutritionRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Parse the leading decimal number of a string, ignoring leading whitespace
fn parse_leading_number(text: &str) -> Option<f64> {
    let pattern = LEADING_NUMBER.as_ref()?;
    let matched = pattern.find(text.trim_start())?;
    matched.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_accepts_numbers_and_numeric_strings() {
        let record = RawNutritionRecord::from_value(json!({
            "a": 12.5,
            "b": "7",
            "c": " 3.25 g",
            "d": ".5",
            "e": "1e3",
        }));
        assert_eq!(record.number("a"), Some(12.5));
        assert_eq!(record.number("b"), Some(7.0));
        assert_eq!(record.number("c"), Some(3.25));
        assert_eq!(record.number("d"), Some(0.5));
        assert_eq!(record.number("e"), Some(1000.0));
    }

    #[test]
    fn test_number_treats_garbage_as_absent() {
        let record = RawNutritionRecord::from_value(json!({
            "null": null,
            "text": "n/a",
            "bool": true,
            "list": [1, 2],
            "empty": "",
        }));
        for key in ["null", "text", "bool", "list", "empty", "missing"] {
            assert_eq!(record.number(key), None, "{key} should be absent");
        }
    }

    #[test]
    fn test_text_only_returns_strings() {
        let record = RawNutritionRecord::new()
            .with_field("energy_unit", "kJ")
            .with_field("count", 3);
        assert_eq!(record.text("energy_unit"), Some("kJ"));
        assert_eq!(record.text("count"), None);
    }

    #[test]
    fn test_non_object_value_is_empty() {
        assert!(RawNutritionRecord::from_value(json!([1, 2, 3])).is_empty());
        assert!(RawNutritionRecord::from_value(Value::Null).is_empty());
    }
}
