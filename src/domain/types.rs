//! Strongly-typed value objects used by the structured quote query.
//!
//! These wrappers enforce the basic invariants of a trip request (non-empty
//! city, positive whole passenger count, non-negative hours) so that once a
//! value reaches the domain layer it can be sent to the pricing backend as is.
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided count is zero or negative.
    #[error("value must be greater than zero")]
    NonPositive,
    /// Provided number has a fractional part where a whole number is required.
    #[error("value must be a whole number")]
    Fractional,
    /// Provided number is NaN or infinite.
    #[error("value is not a number")]
    NotANumber,
    /// Provided number is below zero.
    #[error("value cannot be negative")]
    Negative,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_empty_string_newtype!(CityName, "City the trip departs from.");

non_empty_string_newtype!(
    ZipCode,
    "Zip code narrowing the service area, trimmed and non-empty."
);

/// Whole, positive number of riders.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32")]
pub struct PassengerCount(u32);

impl PassengerCount {
    /// Creates a passenger count ensuring it is greater than zero.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositive)
        }
    }

    /// Converts a coerced numeric answer, rejecting NaN, fractions and zero.
    pub fn from_f64(value: f64) -> Result<Self, TypeConstraintError> {
        if !value.is_finite() {
            return Err(TypeConstraintError::NotANumber);
        }
        if value.fract() != 0.0 {
            return Err(TypeConstraintError::Fractional);
        }
        if value < 1.0 {
            return Err(TypeConstraintError::NonPositive);
        }
        if value > f64::from(u32::MAX) {
            return Err(TypeConstraintError::InvalidValue(format!(
                "{value} passengers is out of range"
            )));
        }
        Self::new(value as u32)
    }

    /// Returns the raw count.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PassengerCount {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for PassengerCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requested trip length in hours; finite and never negative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(try_from = "f64")]
pub struct TripHours(f64);

impl TripHours {
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if !value.is_finite() {
            return Err(TypeConstraintError::NotANumber);
        }
        if value < 0.0 {
            return Err(TypeConstraintError::Negative);
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TripHours {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for TripHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Preferred vehicle size relative to the party.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SizeDirection {
    Larger,
    Smaller,
}

impl SizeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SizeDirection::Larger => "larger",
            SizeDirection::Smaller => "smaller",
        }
    }

    /// Parses a free-text preference. Phrases that express no preference map
    /// to `None`.
    pub fn parse_preference(value: &str) -> Result<Option<Self>, TypeConstraintError> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "" | "no" | "none" | "no preference" | "either" | "any" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl Display for SizeDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "larger" => Ok(SizeDirection::Larger),
            "smaller" => Ok(SizeDirection::Smaller),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown size direction `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_name_is_trimmed_and_non_empty() {
        assert_eq!(CityName::new("  Austin ").unwrap().as_str(), "Austin");
        assert_eq!(CityName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn passenger_count_rejects_fractions_zero_and_nan() {
        assert_eq!(PassengerCount::from_f64(20.0).unwrap().get(), 20);
        assert_eq!(
            PassengerCount::from_f64(2.5),
            Err(TypeConstraintError::Fractional)
        );
        assert_eq!(
            PassengerCount::from_f64(0.0),
            Err(TypeConstraintError::NonPositive)
        );
        assert_eq!(
            PassengerCount::from_f64(f64::NAN),
            Err(TypeConstraintError::NotANumber)
        );
    }

    #[test]
    fn trip_hours_allow_zero_but_not_negative() {
        assert_eq!(TripHours::new(0.0).unwrap().get(), 0.0);
        assert_eq!(TripHours::new(-1.0), Err(TypeConstraintError::Negative));
        assert_eq!(
            TripHours::new(f64::INFINITY),
            Err(TypeConstraintError::NotANumber)
        );
    }

    #[test]
    fn size_direction_parses_case_insensitively() {
        assert_eq!("Larger".parse::<SizeDirection>(), Ok(SizeDirection::Larger));
        assert_eq!(" SMALLER ".parse::<SizeDirection>(), Ok(SizeDirection::Smaller));
        assert!("bigger".parse::<SizeDirection>().is_err());
    }

    #[test]
    fn no_preference_phrases_map_to_none() {
        assert_eq!(SizeDirection::parse_preference("No preference"), Ok(None));
        assert_eq!(SizeDirection::parse_preference("either"), Ok(None));
        assert_eq!(
            SizeDirection::parse_preference("larger"),
            Ok(Some(SizeDirection::Larger))
        );
    }

    #[test]
    fn deserializing_goes_through_the_constructors() {
        let city: CityName = serde_json::from_str(r#"" Austin ""#).unwrap();
        assert_eq!(city.as_str(), "Austin");
        assert_eq!(serde_json::from_str::<PassengerCount>("20").unwrap().get(), 20);

        assert!(serde_json::from_str::<CityName>(r#""   ""#).is_err());
        assert!(serde_json::from_str::<ZipCode>(r#""""#).is_err());
        assert!(serde_json::from_str::<PassengerCount>("0").is_err());
        assert!(serde_json::from_str::<TripHours>("-1.5").is_err());
    }
}
