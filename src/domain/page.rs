use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::fixed::Fixed;

/// Standard paper sizes offered by the sheet layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperSize {
    #[default]
    Letter,
    Legal,
    Tabloid,
    A3,
    A4,
    A5,
}

impl PaperSize {
    pub const ALL: [PaperSize; 6] = [Self::Letter, Self::Legal, Self::Tabloid, Self::A3, Self::A4, Self::A5];

    pub fn key(self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Legal => "legal",
            Self::Tabloid => "tabloid",
            Self::A3 => "a3",
            Self::A4 => "a4",
            Self::A5 => "a5",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.key() == key)
    }

    /// Width and height in inches, portrait orientation.
    pub fn dimensions(self) -> (Fixed, Fixed) {
        match self {
            Self::Letter => (Fixed::from_millis(8_500), Fixed::from_int(11)),
            Self::Legal => (Fixed::from_millis(8_500), Fixed::from_int(14)),
            Self::Tabloid => (Fixed::from_int(11), Fixed::from_int(17)),
            Self::A3 => (Fixed::from_millis(11_690), Fixed::from_millis(16_540)),
            Self::A4 => (Fixed::from_millis(8_270), Fixed::from_millis(11_690)),
            Self::A5 => (Fixed::from_millis(5_830), Fixed::from_millis(8_270)),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for PaperSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for PaperSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    pub fn key(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [Self::Portrait, Self::Landscape].into_iter().find(|o| o.key() == key)
    }
}

impl Serialize for PageOrientation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for PageOrientation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key).unwrap_or_default())
    }
}

/// Paper geometry for the printed sheet. Margins are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub paper_size: PaperSize,
    pub orientation: PageOrientation,
    pub top_margin: Fixed,
    pub left_margin: Fixed,
    pub bottom_margin: Fixed,
    pub right_margin: Fixed,
}

impl PageSettings {
    pub fn factory() -> Self {
        let quarter_inch = Fixed::from_millis(250);
        Self {
            paper_size: PaperSize::Letter,
            orientation: PageOrientation::Portrait,
            top_margin: quarter_inch,
            left_margin: quarter_inch,
            bottom_margin: quarter_inch,
            right_margin: quarter_inch,
        }
    }

    /// Repairs anything out of range. Enumerated members are valid by
    /// construction after decode; a negative margin becomes zero.
    pub fn ensure_validity(&mut self) {
        for margin in [
            &mut self.top_margin,
            &mut self.left_margin,
            &mut self.bottom_margin,
            &mut self.right_margin,
        ] {
            if *margin < Fixed::ZERO {
                *margin = Fixed::ZERO;
            }
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::factory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_margins_are_clamped() {
        let mut page = PageSettings::factory();
        page.left_margin = Fixed::from_int(-1);
        page.ensure_validity();
        assert_eq!(page.left_margin, Fixed::ZERO);
        assert_eq!(page.top_margin, Fixed::from_millis(250));
    }

    #[test]
    fn test_unknown_paper_size_heals() {
        let page: PageSettings = serde_json::from_str(r#"{"paper_size": "b5"}"#).unwrap();
        assert_eq!(page.paper_size, PaperSize::Letter);
    }

    #[test]
    fn test_round_trip() {
        let mut page = PageSettings::factory();
        page.paper_size = PaperSize::A4;
        page.orientation = PageOrientation::Landscape;
        let json = serde_json::to_string(&page).unwrap();
        let loaded: PageSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(page, loaded);
    }
}
