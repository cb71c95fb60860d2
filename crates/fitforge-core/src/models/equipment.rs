// ABOUTME: Equipment model normalised at the boundary into a single tagged enum
// ABOUTME: Accepts both plain strings and {"name": ...} objects from upstream payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment as it arrives from upstream payloads
///
/// Exercise catalogs store equipment either as a bare string or as an object
/// with a `name` property. Both shapes collapse into [`Equipment`] on
/// deserialization so business logic never inspects the raw shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEquipment {
    /// `"barbell"`
    Name(String),
    /// `{"name": "barbell"}`
    Named {
        /// Equipment name
        name: String,
    },
}

/// Normalised equipment kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawEquipment", into = "String")]
pub enum Equipment {
    /// Olympic or standard barbell
    Barbell,
    /// Dumbbells
    Dumbbell,
    /// Kettlebell
    Kettlebell,
    /// Cable stack
    Cable,
    /// Plate-loaded or selectorised machine
    Machine,
    /// No external load
    Bodyweight,
    /// Elastic resistance band
    ResistanceBand,
    /// Pull-up bar
    PullUpBar,
    /// Anything the catalog names that is not modelled above
    Other(String),
}

impl Equipment {
    /// Parse an equipment name leniently (case, spaces, dashes and underscores ignored)
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "barbell" | "ezbar" | "trapbar" => Self::Barbell,
            "dumbbell" | "dumbbells" => Self::Dumbbell,
            "kettlebell" | "kettlebells" => Self::Kettlebell,
            "cable" | "cables" | "cablemachine" => Self::Cable,
            "machine" | "smithmachine" | "legpress" => Self::Machine,
            "bodyweight" | "none" | "body" => Self::Bodyweight,
            "band" | "bands" | "resistanceband" => Self::ResistanceBand,
            "pullupbar" | "chinupbar" => Self::PullUpBar,
            _ => Self::Other(name.trim().to_owned()),
        }
    }

    /// Canonical name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Barbell => "barbell",
            Self::Dumbbell => "dumbbell",
            Self::Kettlebell => "kettlebell",
            Self::Cable => "cable",
            Self::Machine => "machine",
            Self::Bodyweight => "bodyweight",
            Self::ResistanceBand => "resistance_band",
            Self::PullUpBar => "pull_up_bar",
            Self::Other(name) => name,
        }
    }

    /// Whether the equipment adds no external load
    #[must_use]
    pub const fn is_unloaded(&self) -> bool {
        matches!(self, Self::Bodyweight | Self::PullUpBar)
    }
}

impl From<RawEquipment> for Equipment {
    fn from(raw: RawEquipment) -> Self {
        match raw {
            RawEquipment::Name(name) | RawEquipment::Named { name } => Self::from_name(&name),
        }
    }
}

impl From<Equipment> for String {
    fn from(equipment: Equipment) -> Self {
        equipment.as_str().to_owned()
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_and_object_shapes_normalise_identically() {
        let from_string: Equipment = serde_json::from_str(r#""Barbell""#).unwrap();
        let from_object: Equipment = serde_json::from_str(r#"{"name": "barbell"}"#).unwrap();
        assert_eq!(from_string, Equipment::Barbell);
        assert_eq!(from_object, Equipment::Barbell);
    }

    #[test]
    fn test_unknown_equipment_is_preserved() {
        let equipment: Equipment = serde_json::from_str(r#"{"name": "Sandbag"}"#).unwrap();
        assert_eq!(equipment, Equipment::Other("Sandbag".to_owned()));
        assert_eq!(serde_json::to_string(&equipment).unwrap(), r#""Sandbag""#);
    }

    #[test]
    fn test_lenient_name_parsing() {
        assert_eq!(Equipment::from_name("Pull-Up Bar"), Equipment::PullUpBar);
        assert_eq!(Equipment::from_name("resistance_band"), Equipment::ResistanceBand);
    }
}
