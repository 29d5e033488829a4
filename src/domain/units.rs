//! Weight and length unit normalization.
//!
//! Everything downstream works in kilograms and centimeters; user input
//! arrives in whatever unit the intake form was set to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pounds to kilograms, exact by definition.
const LB_TO_KG: f64 = 0.45359237;
/// Inches to centimeters, exact by definition.
const IN_TO_CM: f64 = 2.54;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("unrecognized unit: {0}")]
    InvalidUnit(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl WeightUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Lb),
            other => Err(UnitError::InvalidUnit(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Cm,
    In,
}

impl LengthUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::In => "in",
        }
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Cm),
            "in" | "inch" | "inches" => Ok(LengthUnit::In),
            other => Err(UnitError::InvalidUnit(other.to_string())),
        }
    }
}

/// Converts a weight to kilograms.
///
/// Negative values pass through unchanged; validating positivity is the
/// caller's concern, this only normalizes the unit.
pub fn to_kilograms(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value,
        WeightUnit::Lb => value * LB_TO_KG,
    }
}

/// Converts a length to centimeters. Same validation contract as
/// [`to_kilograms`].
pub fn to_centimeters(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Cm => value,
        LengthUnit::In => value * IN_TO_CM,
    }
}

/// String-keyed variant for callers holding raw form input.
pub fn to_kilograms_str(value: f64, unit: &str) -> Result<f64, UnitError> {
    Ok(to_kilograms(value, unit.parse()?))
}

/// String-keyed variant for callers holding raw form input.
pub fn to_centimeters_str(value: f64, unit: &str) -> Result<f64, UnitError> {
    Ok(to_centimeters(value, unit.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilograms_pass_through() {
        assert_eq!(to_kilograms(12.5, WeightUnit::Kg), 12.5);
    }

    #[test]
    fn pounds_convert_with_exact_factor() {
        assert_eq!(to_kilograms(1.0, WeightUnit::Lb), 0.45359237);
        assert!((to_kilograms(10.0, WeightUnit::Lb) - 4.5359237).abs() < 1e-12);
    }

    #[test]
    fn inches_convert_with_exact_factor() {
        assert_eq!(to_centimeters(1.0, LengthUnit::In), 2.54);
        assert_eq!(to_centimeters(100.0, LengthUnit::Cm), 100.0);
    }

    #[test]
    fn negative_values_pass_through_unchanged() {
        assert_eq!(to_kilograms(-3.0, WeightUnit::Kg), -3.0);
        assert_eq!(to_centimeters(-2.0, LengthUnit::In), -5.08);
    }

    #[test]
    fn unit_aliases_parse_case_insensitively() {
        assert_eq!(to_kilograms_str(2.0, "KGS").unwrap(), 2.0);
        assert_eq!(to_kilograms_str(1.0, "lbs").unwrap(), 0.45359237);
        assert_eq!(to_centimeters_str(1.0, "Inch").unwrap(), 2.54);
    }

    #[test]
    fn unknown_units_are_rejected() {
        assert_eq!(
            to_kilograms_str(1.0, "stone").unwrap_err(),
            UnitError::InvalidUnit("stone".to_string())
        );
        assert_eq!(
            to_centimeters_str(1.0, "ft").unwrap_err(),
            UnitError::InvalidUnit("ft".to_string())
        );
    }
}
