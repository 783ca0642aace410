//! Validated Attributes - Numeric Value Objects
//!
//! Each type wraps one scalar that passed its range rule at construction.
//! There are no setters, so the check holds for the value's whole lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{BodyStyle, Catalog, FuelKind, RubberKind};
use crate::validation::{record_check, AttributeKind, RangeRule, ValidationError};

/// Maximum engine power in hp, 1..=200
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct EnginePower(f64);

impl EnginePower {
    pub const RULE: RangeRule<f64> = RangeRule {
        attribute: AttributeKind::MaxPower,
        min: 1.0,
        max: 200.0,
    };

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        Self::RULE.check(value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Number of doors, 2..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct DoorCount(u8);

impl DoorCount {
    pub const RULE: RangeRule<i64> = RangeRule {
        attribute: AttributeKind::DoorCount,
        min: 2,
        max: 5,
    };

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        let value = Self::RULE.check(value)?;
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::new(AttributeKind::DoorCount, value))
    }

    /// Integral numbers only: `4.0` is four doors, `4.5` is rejected.
    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value.fract() != 0.0 {
            record_check();
            tracing::debug!(attribute = %AttributeKind::DoorCount, %value, "attribute rejected");
            return Err(ValidationError::new(AttributeKind::DoorCount, value));
        }
        // Out-of-range values saturate and are rejected by the range rule.
        Self::new(value as i64)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Wheel diameter, 33..=45
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct WheelDiameter(f64);

impl WheelDiameter {
    pub const RULE: RangeRule<f64> = RangeRule {
        attribute: AttributeKind::WheelDiameter,
        min: 33.0,
        max: 45.0,
    };

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        Self::RULE.check(value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

macro_rules! scalar_impls {
    ($ty:ty, $raw:ty, $out:ty) => {
        impl TryFrom<$raw> for $ty {
            type Error = ValidationError;

            fn try_from(value: $raw) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for $out {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

scalar_impls!(EnginePower, f64, f64);
scalar_impls!(DoorCount, i64, u8);
scalar_impls!(WheelDiameter, f64, f64);

impl TryFrom<f64> for DoorCount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

/// Validate one raw textual value for `attribute`, returning its canonical form.
///
/// Numeric text that does not parse is rejected by the attribute it was
/// meant for.
pub fn check_raw(attribute: AttributeKind, raw: &str) -> Result<String, ValidationError> {
    let reject = || ValidationError::new(attribute, raw);

    let canonical = match attribute {
        AttributeKind::MaxPower => {
            let value: f64 = raw.trim().parse().map_err(|_| reject())?;
            EnginePower::new(value)?.to_string()
        }
        AttributeKind::DoorCount => {
            let value: f64 = raw.trim().parse().map_err(|_| reject())?;
            DoorCount::from_f64(value)?.to_string()
        }
        AttributeKind::WheelDiameter => {
            let value: f64 = raw.trim().parse().map_err(|_| reject())?;
            WheelDiameter::new(value)?.to_string()
        }
        AttributeKind::FuelKind => raw.parse::<FuelKind>()?.as_str().to_string(),
        AttributeKind::BodyStyle => raw.parse::<BodyStyle>()?.to_string(),
        AttributeKind::RubberKind => raw.parse::<RubberKind>()?.to_string(),
    };

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_power_bounds() {
        assert_eq!(EnginePower::new(150.0).unwrap().value(), 150.0);
        assert!(EnginePower::new(1.0).is_ok());
        assert!(EnginePower::new(200.0).is_ok());
        assert!(EnginePower::new(0.0).is_err());
        assert!(EnginePower::new(201.0).is_err());
        assert!(EnginePower::new(250.0).is_err());
        assert!(EnginePower::new(0.5).is_err());
        assert!(EnginePower::new(199.9).is_ok());
    }

    #[test]
    fn test_door_count_bounds() {
        assert_eq!(DoorCount::new(4).unwrap().value(), 4);
        assert!(DoorCount::new(2).is_ok());
        assert!(DoorCount::new(5).is_ok());
        assert!(DoorCount::new(1).is_err());
        assert!(DoorCount::new(6).is_err());
        assert!(DoorCount::new(-3).is_err());
    }

    #[test]
    fn test_door_count_from_integral_float() {
        assert_eq!(DoorCount::from_f64(4.0).unwrap().value(), 4);
        assert!(DoorCount::from_f64(6.0).is_err());
        assert!(DoorCount::from_f64(1e20).is_err());

        for bad in [4.5, f64::NAN, f64::INFINITY] {
            let err = DoorCount::from_f64(bad).unwrap_err();
            assert_eq!(err.attribute, AttributeKind::DoorCount);
        }

        let doors: DoorCount = serde_json::from_str("4.0").unwrap();
        assert_eq!(doors.value(), 4);
    }

    #[test]
    fn test_wheel_diameter_bounds() {
        assert_eq!(WheelDiameter::new(38.0).unwrap().value(), 38.0);
        assert!(WheelDiameter::new(33.0).is_ok());
        assert!(WheelDiameter::new(45.0).is_ok());
        assert!(WheelDiameter::new(32.0).is_err());
        assert!(WheelDiameter::new(46.0).is_err());
        assert!(WheelDiameter::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(EnginePower::new(0.0).unwrap_err().to_string(), "Неверное значение hp.");
        assert_eq!(DoorCount::new(6).unwrap_err().to_string(), "Неверное количество дверей.");
        assert_eq!(WheelDiameter::new(30.0).unwrap_err().to_string(), "Неверный диаметр колеса.");
    }

    #[test]
    fn test_integral_values_display_without_fraction() {
        assert_eq!(EnginePower::new(150.0).unwrap().to_string(), "150");
        assert_eq!(WheelDiameter::new(37.5).unwrap().to_string(), "37.5");
    }

    #[test]
    fn test_deserialize_validates() {
        let power: EnginePower = serde_json::from_str("150").unwrap();
        assert_eq!(power.value(), 150.0);
        assert!(serde_json::from_str::<EnginePower>("0").is_err());
        assert!(serde_json::from_str::<DoorCount>("6").is_err());
        assert!(serde_json::from_str::<WheelDiameter>("46.5").is_err());
        assert_eq!(serde_json::to_string(&DoorCount::new(3).unwrap()).unwrap(), "3");
    }

    #[test]
    fn test_check_raw() {
        assert_eq!(check_raw(AttributeKind::MaxPower, " 150 ").unwrap(), "150");
        assert_eq!(check_raw(AttributeKind::BodyStyle, "  ХЕТЧБЭК ").unwrap(), "хетчбэк");
        assert_eq!(check_raw(AttributeKind::FuelKind, "Дизель").unwrap(), "diesel");

        let err = check_raw(AttributeKind::DoorCount, "four").unwrap_err();
        assert_eq!(err.attribute, AttributeKind::DoorCount);
        assert_eq!(err.rejected, "four");

        assert!(check_raw(AttributeKind::DoorCount, "4.5").is_err());
        assert_eq!(check_raw(AttributeKind::DoorCount, "4.0").unwrap(), "4");
        assert!(check_raw(AttributeKind::RubberKind, "шипованная").is_err());
    }
}
