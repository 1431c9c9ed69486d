//! Ordered item breakdown attached to a resource listing.
//!
//! A [`Specification`] maps item names to positive whole quantities. Entries
//! keep the order in which they were supplied, which is also the order used
//! when a resource is split into request lines. Every invariant is checked
//! when the map is built, so code holding a `Specification` never re-validates
//! it.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::domain::types::{ItemName, Quantity};

/// Reasons a specification map is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    #[error("specification item name cannot be empty")]
    EmptyItemName,
    #[error("specification item '{0}' is listed more than once")]
    DuplicateItem(String),
    #[error("quantity of '{0}' must be greater than zero")]
    NonPositiveQuantity(String),
    #[error("quantity of '{0}' must be a whole number")]
    NonIntegerQuantity(String),
    #[error("quantity of '{0}' is too large")]
    QuantityOutOfRange(String),
    #[error("specification must be a JSON object: {0}")]
    Malformed(String),
    #[error("specification line '{0}' must look like 'Name: quantity'")]
    MalformedLine(String),
}

/// One `item -> quantity` pair of a [`Specification`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificationEntry {
    pub item: ItemName,
    pub quantity: Quantity,
}

/// Validated, insertion-ordered map of item names to quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specification {
    entries: Vec<SpecificationEntry>,
}

impl Specification {
    /// Builds a specification from `(name, quantity)` pairs.
    ///
    /// Names are trimmed; duplicates are detected case-insensitively.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, SpecificationError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut specification = Self::default();
        for (name, quantity) in pairs {
            specification.push(name.into(), quantity)?;
        }
        Ok(specification)
    }

    /// Parses JSON text, keeping entries in document order.
    pub fn from_json_str(raw: &str) -> Result<Self, SpecificationError> {
        let RawEntries(pairs) = serde_json::from_str(raw)
            .map_err(|e| SpecificationError::Malformed(e.to_string()))?;
        let mut specification = Self::default();
        for (name, raw) in pairs {
            let quantity = quantity_from_json(&name, &raw)?;
            specification.push(name, quantity)?;
        }
        Ok(specification)
    }

    fn push(&mut self, name: String, quantity: i64) -> Result<(), SpecificationError> {
        let item = ItemName::new(name).map_err(|_| SpecificationError::EmptyItemName)?;

        if self
            .entries
            .iter()
            .any(|entry| entry.item.to_lowercase() == item.to_lowercase())
        {
            return Err(SpecificationError::DuplicateItem(item.into_inner()));
        }

        if quantity <= 0 {
            return Err(SpecificationError::NonPositiveQuantity(item.into_inner()));
        }
        let quantity = i32::try_from(quantity)
            .ok()
            .and_then(|value| Quantity::new(value).ok())
            .ok_or_else(|| SpecificationError::QuantityOutOfRange(item.to_string()))?;

        self.entries.push(SpecificationEntry { item, quantity });
        Ok(())
    }

    pub fn entries(&self) -> &[SpecificationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpecificationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn quantity_from_json(name: &str, raw: &Value) -> Result<i64, SpecificationError> {
    let name = name.trim().to_string();
    match raw {
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                return Ok(value);
            }
            if number.as_u64().is_some() {
                return Err(SpecificationError::QuantityOutOfRange(name));
            }
            match number.as_f64() {
                Some(value) if value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) => {
                    Ok(value as i64)
                }
                Some(value) if value.fract() == 0.0 => {
                    Err(SpecificationError::QuantityOutOfRange(name))
                }
                _ => Err(SpecificationError::NonIntegerQuantity(name)),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| SpecificationError::NonIntegerQuantity(name)),
        _ => Err(SpecificationError::NonIntegerQuantity(name)),
    }
}

/// Object entries in document order, not yet validated.
struct RawEntries(Vec<(String, Value)>);

struct RawEntriesVisitor;

impl<'de> Visitor<'de> for RawEntriesVisitor {
    type Value = RawEntries;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping item names to whole quantities")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(pair) = access.next_entry::<String, Value>()? {
            pairs.push(pair);
        }
        Ok(RawEntries(pairs))
    }
}

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawEntriesVisitor)
    }
}

impl Serialize for Specification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.item.as_str(), &entry.quantity.get())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Specification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawEntries(pairs) = RawEntries::deserialize(deserializer)?;
        let mut specification = Specification::default();
        for (name, raw) in pairs {
            let quantity = quantity_from_json(&name, &raw).map_err(serde::de::Error::custom)?;
            specification
                .push(name, quantity)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(specification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let spec = Specification::from_pairs([("Cement", 5), ("Brick", 10), ("Sand", 2)]).unwrap();
        let names: Vec<&str> = spec.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(names, vec!["Cement", "Brick", "Sand"]);
    }

    #[test]
    fn rejects_zero_quantity() {
        assert_eq!(
            Specification::from_pairs([("Drill", 0)]).unwrap_err(),
            SpecificationError::NonPositiveQuantity("Drill".into())
        );
    }

    #[test]
    fn rejects_negative_quantity() {
        assert!(matches!(
            Specification::from_pairs([("Brick", -3)]),
            Err(SpecificationError::NonPositiveQuantity(_))
        ));
    }

    #[test]
    fn rejects_quantities_beyond_i32() {
        assert!(matches!(
            Specification::from_pairs([("Nails", i64::from(i32::MAX) + 1)]),
            Err(SpecificationError::QuantityOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_duplicate_names_ignoring_case() {
        assert_eq!(
            Specification::from_pairs([("Brick", 1), (" brick ", 2)]).unwrap_err(),
            SpecificationError::DuplicateItem("brick".into())
        );
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            Specification::from_pairs([("  ", 1)]).unwrap_err(),
            SpecificationError::EmptyItemName
        );
    }

    #[test]
    fn parses_json_numbers_and_numeric_strings() {
        let spec = Specification::from_json_str(r#"{"Brick": 10, "Cement": "5"}"#).unwrap();
        assert_eq!(spec.len(), 2);
        assert!(spec.iter().any(|e| e.item == "Cement" && e.quantity == 5));
    }

    #[test]
    fn accepts_whole_floats() {
        let spec = Specification::from_json_str(r#"{"Gravel": 4.0}"#).unwrap();
        assert_eq!(spec.entries()[0].quantity, 4);
    }

    #[test]
    fn rejects_fractional_json_quantity() {
        assert_eq!(
            Specification::from_json_str(r#"{"Gravel": 1.5}"#).unwrap_err(),
            SpecificationError::NonIntegerQuantity("Gravel".into())
        );
    }

    #[test]
    fn rejects_descriptive_json_values() {
        assert!(matches!(
            Specification::from_json_str(r#"{"Height": "60 feet"}"#),
            Err(SpecificationError::NonIntegerQuantity(_))
        ));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(matches!(
            Specification::from_json_str("[1, 2]"),
            Err(SpecificationError::Malformed(_))
        ));
    }

    #[test]
    fn stored_text_keeps_document_order() {
        let spec = Specification::from_json_str(r#"{"Cement": 5, "Brick": 10}"#).unwrap();
        let names: Vec<&str> = spec.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(names, vec!["Cement", "Brick"]);
        assert_eq!(
            serde_json::to_string(&spec).unwrap(),
            r#"{"Cement":5,"Brick":10}"#
        );
    }

    #[test]
    fn stored_text_with_invalid_quantity_is_rejected() {
        assert_eq!(
            Specification::from_json_str(r#"{"Drill": 0}"#).unwrap_err(),
            SpecificationError::NonPositiveQuantity("Drill".into())
        );
    }

    #[test]
    fn serde_round_trip_preserves_order() {
        let spec = Specification::from_pairs([("Rebar", 20), ("Cement", 5)]).unwrap();
        let text = serde_json::to_string(&spec).unwrap();
        assert_eq!(text, r#"{"Rebar":20,"Cement":5}"#);
        let parsed: Specification = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, spec);
    }
}
