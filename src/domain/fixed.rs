use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const UNIT: i64 = 1_000;

/// Fixed-point decimal with three fractional digits, stored as a count
/// of thousandths. All numeric settings fields use this type so that
/// values survive save/load without floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i64);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);

    pub const fn from_millis(millis: i64) -> Self {
        Fixed(millis)
    }

    pub fn from_int(value: i64) -> Self {
        Fixed(value.saturating_mul(UNIT))
    }

    pub fn from_f64(value: f64) -> Self {
        Fixed((value * UNIT as f64).round() as i64)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / UNIT as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        *self = *self + rhs;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        *self = *self - rhs;
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(self.0.saturating_neg())
    }
}

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Fixed>>(iter: I) -> Fixed {
        iter.fold(Fixed::ZERO, Add::add)
    }
}

impl From<i64> for Fixed {
    fn from(value: i64) -> Self {
        Fixed::from_int(value)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = (self.0 / UNIT).abs();
        let frac = (self.0 % UNIT).unsigned_abs();
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let mut digits = format!("{frac:03}");
            while digits.ends_with('0') {
                digits.pop();
            }
            write!(f, "{sign}{whole}.{digits}")
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid decimal value {0:?}")]
pub struct ParseFixedError(String);

impl FromStr for Fixed {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseFixedError(s.to_string()));
        }
        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| ParseFixedError(s.to_string()))?
        };
        if frac_part.chars().any(|c| !c.is_ascii_digit()) {
            return Err(ParseFixedError(s.to_string()));
        }
        // Digits beyond the third are truncated, matching the stored precision.
        let mut frac_digits: String = frac_part.chars().take(3).collect();
        while frac_digits.len() < 3 {
            frac_digits.push('0');
        }
        let frac: i64 = frac_digits.parse().map_err(|_| ParseFixedError(s.to_string()))?;
        let millis = whole
            .checked_mul(UNIT)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(|| ParseFixedError(s.to_string()))?;
        Ok(Fixed(if negative { -millis } else { millis }))
    }
}

impl Serialize for Fixed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % UNIT == 0 {
            serializer.serialize_i64(self.0 / UNIT)
        } else {
            serializer.serialize_f64(self.to_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Fixed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FixedVisitor;

        impl Visitor<'_> for FixedVisitor {
            type Value = Fixed;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a decimal number or numeric string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Fixed, E> {
                Ok(Fixed::from_int(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Fixed, E> {
                Ok(Fixed::from_int(i64::try_from(value).unwrap_or(i64::MAX)))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Fixed, E> {
                Ok(Fixed::from_f64(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Fixed, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(FixedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!(Fixed::from_millis(2_500).to_string(), "2.5");
        assert_eq!(Fixed::from_millis(-500).to_string(), "-0.5");
        assert_eq!(Fixed::from_int(3).to_string(), "3");
        assert_eq!(Fixed::ZERO.to_string(), "0");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2.5".parse::<Fixed>().unwrap(), Fixed::from_millis(2_500));
        assert_eq!("-0.25".parse::<Fixed>().unwrap(), Fixed::from_millis(-250));
        assert_eq!("+3".parse::<Fixed>().unwrap(), Fixed::from_int(3));
        assert_eq!(".5".parse::<Fixed>().unwrap(), Fixed::from_millis(500));
        assert!("abc".parse::<Fixed>().is_err());
        assert!("1.2.3".parse::<Fixed>().is_err());
        assert!("".parse::<Fixed>().is_err());
    }

    #[test]
    fn test_parse_truncates_extra_digits() {
        assert_eq!("1.23456".parse::<Fixed>().unwrap(), Fixed::from_millis(1_234));
    }

    #[test]
    fn test_arithmetic() {
        let a = Fixed::from_millis(1_500);
        let b = Fixed::from_int(-2);
        assert_eq!(a + b, Fixed::from_millis(-500));
        assert_eq!(a - b, Fixed::from_millis(3_500));
        assert_eq!(-a, Fixed::from_millis(-1_500));
    }

    #[test]
    fn test_serde_whole_values_as_integers() {
        assert_eq!(serde_json::to_string(&Fixed::from_int(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Fixed::from_millis(2_500)).unwrap(), "2.5");
    }

    #[test]
    fn test_serde_accepts_numbers_and_strings() {
        assert_eq!(serde_json::from_str::<Fixed>("5").unwrap(), Fixed::from_int(5));
        assert_eq!(serde_json::from_str::<Fixed>("-1.5").unwrap(), Fixed::from_millis(-1_500));
        assert_eq!(serde_json::from_str::<Fixed>("\"2.25\"").unwrap(), Fixed::from_millis(2_250));
        assert!(serde_json::from_str::<Fixed>("true").is_err());
    }
}
