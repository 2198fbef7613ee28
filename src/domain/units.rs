use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default unit used when entering or displaying lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    FeetAndInches,
    Inch,
    Feet,
    Yard,
    Mile,
    Centimeter,
    Meter,
    Kilometer,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        Self::FeetAndInches,
        Self::Inch,
        Self::Feet,
        Self::Yard,
        Self::Mile,
        Self::Centimeter,
        Self::Meter,
        Self::Kilometer,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::FeetAndInches => "ft_in",
            Self::Inch => "in",
            Self::Feet => "ft",
            Self::Yard => "yd",
            Self::Mile => "mi",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Kilometer => "km",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::FeetAndInches => "Feet & Inches",
            Self::Inch => "Inches",
            Self::Feet => "Feet",
            Self::Yard => "Yards",
            Self::Mile => "Miles",
            Self::Centimeter => "Centimeters",
            Self::Meter => "Meters",
            Self::Kilometer => "Kilometers",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for LengthUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for LengthUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key).unwrap_or_default())
    }
}

/// Default unit used when entering or displaying weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightUnit {
    #[default]
    Pound,
    Ounce,
    Ton,
    Kilogram,
    Gram,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 5] = [Self::Pound, Self::Ounce, Self::Ton, Self::Kilogram, Self::Gram];

    pub fn key(self) -> &'static str {
        match self {
            Self::Pound => "lb",
            Self::Ounce => "oz",
            Self::Ton => "tn",
            Self::Kilogram => "kg",
            Self::Gram => "g",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Pound => "Pounds",
            Self::Ounce => "Ounces",
            Self::Ton => "Tons",
            Self::Kilogram => "Kilograms",
            Self::Gram => "Grams",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for WeightUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for WeightUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key).unwrap_or_default())
    }
}
