use serde::{Deserialize, Serialize};

use super::fixed::Fixed;

/// Definition of a single attribute shown on the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    pub base: Fixed,
    #[serde(default)]
    pub points_per_level: Fixed,
}

impl AttributeDef {
    fn new(id: &str, name: &str, full_name: &str, base: i64, points_per_level: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            full_name: full_name.to_string(),
            base: Fixed::from_int(base),
            points_per_level: Fixed::from_int(points_per_level),
        }
    }

    /// Name used for column headers and pickers.
    pub fn resolved_name(&self) -> &str {
        if self.full_name.is_empty() { &self.name } else { &self.full_name }
    }
}

/// The ordered set of attribute definitions a sheet computes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeDefs {
    defs: Vec<AttributeDef>,
}

impl AttributeDefs {
    pub fn factory() -> Self {
        Self {
            defs: vec![
                AttributeDef::new("st", "ST", "Strength", 10, 10),
                AttributeDef::new("dx", "DX", "Dexterity", 10, 20),
                AttributeDef::new("iq", "IQ", "Intelligence", 10, 20),
                AttributeDef::new("ht", "HT", "Health", 10, 10),
                AttributeDef::new("will", "Will", "", 10, 5),
                AttributeDef::new("per", "Per", "Perception", 10, 5),
                AttributeDef::new("hp", "HP", "Hit Points", 10, 2),
                AttributeDef::new("fp", "FP", "Fatigue Points", 10, 3),
                AttributeDef::new("basic_speed", "Basic Speed", "", 5, 20),
                AttributeDef::new("basic_move", "Basic Move", "", 5, 5),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&AttributeDef> {
        self.defs.iter().find(|def| def.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Drops definitions without an id; an empty set falls back to the
    /// factory set so the sheet always has something to compute from.
    pub fn ensure_validity(&mut self) {
        self.defs.retain(|def| !def.id.is_empty());
        if self.defs.is_empty() {
            *self = Self::factory();
        }
    }
}

impl Default for AttributeDefs {
    fn default() -> Self {
        Self::factory()
    }
}
