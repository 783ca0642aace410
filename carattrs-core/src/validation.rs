//! Validation System - Construction-Time Rules
//!
//! Every attribute runs exactly one rule when it is built.
//! A rule either accepts the raw value or names the attribute that rejected it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static CHECK_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_check_call_count() -> u32 {
    CHECK_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_check_call_count() {
    CHECK_CALL_COUNT.store(0, Ordering::SeqCst);
}

#[inline]
pub(crate) fn record_check() {
    #[cfg(feature = "test-hooks")]
    CHECK_CALL_COUNT.fetch_add(1, Ordering::SeqCst);
}

/// The car characteristic a rule guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AttributeKind {
    MaxPower,
    FuelKind,
    BodyStyle,
    DoorCount,
    WheelDiameter,
    RubberKind,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 6] = [
        Self::MaxPower,
        Self::FuelKind,
        Self::BodyStyle,
        Self::DoorCount,
        Self::WheelDiameter,
        Self::RubberKind,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::MaxPower => "max_power",
            Self::FuelKind => "fuel_kind",
            Self::BodyStyle => "body_style",
            Self::DoorCount => "door_count",
            Self::WheelDiameter => "wheel_diameter",
            Self::RubberKind => "rubber_kind",
        }
    }

    /// Fixed message reported when this attribute rejects a value.
    pub const fn rejection_message(&self) -> &'static str {
        match self {
            Self::MaxPower => "Неверное значение hp.",
            Self::FuelKind => "Неверный тип топлива.",
            Self::BodyStyle => "Неверный тип кузова.",
            Self::DoorCount => "Неверное количество дверей.",
            Self::WheelDiameter => "Неверный диаметр колеса.",
            Self::RubberKind => "Неверный тип резины.",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a raw value fails its attribute's rule.
///
/// The display text is the attribute's fixed message; `rejected` keeps the
/// offending input for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", .attribute.rejection_message())]
pub struct ValidationError {
    pub attribute: AttributeKind,
    pub rejected: String,
}

impl ValidationError {
    pub fn new(attribute: AttributeKind, rejected: impl ToString) -> Self {
        Self {
            attribute,
            rejected: rejected.to_string(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.attribute.rejection_message()
    }
}

/// Inclusive numeric range bound to one attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRule<T> {
    pub attribute: AttributeKind,
    pub min: T,
    pub max: T,
}

impl<T> RangeRule<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    /// NaN compares false against both bounds, so it is never contained.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, value: T) -> Result<T, ValidationError> {
        record_check();

        if self.contains(value) {
            tracing::debug!(attribute = %self.attribute, %value, "attribute accepted");
            Ok(value)
        } else {
            tracing::debug!(
                attribute = %self.attribute,
                %value,
                min = %self.min,
                max = %self.max,
                "attribute rejected"
            );
            Err(ValidationError::new(self.attribute, value))
        }
    }
}
