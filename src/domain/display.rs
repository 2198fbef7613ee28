use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a piece of sheet text is shown. The zero member is
/// `NotShown`, which is what a document that never mentions the field
/// decodes to; the factory constructor picks richer defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayOption {
    #[default]
    NotShown,
    Inline,
    Tooltip,
    InlineAndTooltip,
}

impl DisplayOption {
    pub const ALL: [DisplayOption; 4] = [
        Self::NotShown,
        Self::Inline,
        Self::Tooltip,
        Self::InlineAndTooltip,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::NotShown => "not_shown",
            Self::Inline => "inline",
            Self::Tooltip => "tooltip",
            Self::InlineAndTooltip => "inline_and_tooltip",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::NotShown => "Not Shown",
            Self::Inline => "Inline",
            Self::Tooltip => "Tooltip",
            Self::InlineAndTooltip => "Inline & Tooltip",
        }
    }

    pub fn inline(self) -> bool {
        matches!(self, Self::Inline | Self::InlineAndTooltip)
    }

    pub fn tooltip(self) -> bool {
        matches!(self, Self::Tooltip | Self::InlineAndTooltip)
    }
}

impl fmt::Display for DisplayOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for DisplayOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for DisplayOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for option in DisplayOption::ALL {
            assert_eq!(DisplayOption::from_key(option.key()), Some(option));
        }
    }

    #[test]
    fn test_unknown_key_heals_to_default() {
        let decoded: DisplayOption = serde_json::from_str("\"hologram\"").unwrap();
        assert_eq!(decoded, DisplayOption::NotShown);
    }

    #[test]
    fn test_predicates() {
        assert!(DisplayOption::InlineAndTooltip.inline());
        assert!(DisplayOption::InlineAndTooltip.tooltip());
        assert!(!DisplayOption::Tooltip.inline());
        assert!(!DisplayOption::NotShown.tooltip());
    }
}
