use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Keys for the printable sections of a sheet, in factory order.
pub const BLOCK_KEYS: [&str; 10] = [
    "reactions",
    "conditional_modifiers",
    "melee",
    "ranged",
    "traits",
    "skills",
    "spells",
    "equipment",
    "other_equipment",
    "notes",
];

/// Ordering of the sheet's printable sections. Each row is a
/// space-separated list of block keys laid out side by side; rows
/// stack top to bottom. This is the one layout-affecting field the
/// engine owns: editors treat a change here as a structural change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockLayout {
    rows: Vec<String>,
}

impl BlockLayout {
    pub fn factory() -> Self {
        Self {
            rows: vec![
                "reactions conditional_modifiers".to_string(),
                "melee".to_string(),
                "ranged".to_string(),
                "traits skills".to_string(),
                "spells".to_string(),
                "equipment".to_string(),
                "other_equipment".to_string(),
                "notes".to_string(),
            ],
        }
    }

    /// Parse the one-row-per-line text format, healing as needed.
    pub fn from_text(text: &str) -> Self {
        let mut layout = Self {
            rows: text
                .lines()
                .map(|line| line.trim().to_ascii_lowercase())
                .filter(|line| !line.is_empty())
                .collect(),
        };
        layout.ensure_validity();
        layout
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Drops unknown and repeated keys, removes rows left empty, and
    /// appends any block not mentioned so every section has a slot.
    pub fn ensure_validity(&mut self) {
        let mut seen: HashSet<String> = HashSet::new();
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut keys = Vec::new();
            for key in row.split_whitespace() {
                let key = key.to_ascii_lowercase();
                if BLOCK_KEYS.contains(&key.as_str()) && seen.insert(key.clone()) {
                    keys.push(key);
                }
            }
            if !keys.is_empty() {
                rows.push(keys.join(" "));
            }
        }
        for key in BLOCK_KEYS {
            if !seen.contains(key) {
                rows.push(key.to_string());
            }
        }
        self.rows = rows;
    }
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self::factory()
    }
}

impl fmt::Display for BlockLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows.join("\n"))
    }
}
