//! Catalog System - Closed Sets
//!
//! Fuel kinds, body styles and rubber kinds are fixed enumerations.
//! Parsing a raw string is the membership check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{record_check, AttributeKind, ValidationError};

/// A fixed set of allowed values for one attribute.
pub trait Catalog: Sized + Copy + 'static {
    const ATTRIBUTE: AttributeKind;
    const ALL: &'static [Self];

    /// Canonical identifier, as stored and serialized
    fn as_str(&self) -> &'static str;
}

/// Membership without normalization: the raw string must match exactly.
pub fn lookup_exact<C: Catalog>(raw: &str) -> Result<C, ValidationError> {
    record_check();
    let found = C::ALL.iter().copied().find(|c| c.as_str() == raw);
    report::<C>(raw, found)
}

/// Membership after trimming and lowercasing the raw string.
pub fn lookup_normalized<C: Catalog>(raw: &str) -> Result<C, ValidationError> {
    record_check();
    let normalized = raw.trim().to_lowercase();
    let found = C::ALL.iter().copied().find(|c| c.as_str() == normalized);
    report::<C>(raw, found)
}

fn report<C: Catalog>(raw: &str, found: Option<C>) -> Result<C, ValidationError> {
    match found {
        Some(value) => {
            tracing::debug!(attribute = %C::ATTRIBUTE, value = value.as_str(), "attribute accepted");
            Ok(value)
        }
        None => {
            tracing::debug!(attribute = %C::ATTRIBUTE, raw, "attribute rejected");
            Err(ValidationError::new(C::ATTRIBUTE, raw))
        }
    }
}

macro_rules! catalog_string_impls {
    ($ty:ty, $lookup:ident) => {
        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $lookup::<Self>(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// --- Fuel ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FuelKind {
    Petrol,
    Diesel,
    Electric,
}

impl FuelKind {
    /// Human-readable label used in descriptions
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Petrol => "Бензин",
            Self::Diesel => "Дизель",
            Self::Electric => "Электричество",
        }
    }
}

impl Catalog for FuelKind {
    const ATTRIBUTE: AttributeKind = AttributeKind::FuelKind;
    const ALL: &'static [Self] = &[Self::Petrol, Self::Diesel, Self::Electric];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "petrol",
            Self::Diesel => "diesel",
            Self::Electric => "electric",
        }
    }
}

impl FromStr for FuelKind {
    type Err = ValidationError;

    /// Accepts the identifier or the label, trimmed and case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        record_check();
        let normalized = s.trim().to_lowercase();
        let found = Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == normalized || f.label().to_lowercase() == normalized);
        report::<Self>(s, found)
    }
}

impl TryFrom<String> for FuelKind {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Serialized by identifier; the label is for descriptions only.
impl From<FuelKind> for String {
    fn from(value: FuelKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FuelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- Body ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BodyStyle {
    OffRoader,
    Jeep,
    Hatchback,
    Cabriolet,
    Fastback,
    Crossover,
    Estate,
    Coupe,
    SportsCar,
    Limousine,
    Sedan,
    Minibus,
    Roadster,
    Minivan,
    Pickup,
}

impl Catalog for BodyStyle {
    const ATTRIBUTE: AttributeKind = AttributeKind::BodyStyle;
    const ALL: &'static [Self] = &[
        Self::OffRoader,
        Self::Jeep,
        Self::Hatchback,
        Self::Cabriolet,
        Self::Fastback,
        Self::Crossover,
        Self::Estate,
        Self::Coupe,
        Self::SportsCar,
        Self::Limousine,
        Self::Sedan,
        Self::Minibus,
        Self::Roadster,
        Self::Minivan,
        Self::Pickup,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::OffRoader => "внедорожник",
            Self::Jeep => "джип",
            Self::Hatchback => "хетчбэк",
            Self::Cabriolet => "кабриолет",
            Self::Fastback => "фастбэк",
            Self::Crossover => "кроссовер",
            Self::Estate => "универсал",
            Self::Coupe => "купе",
            Self::SportsCar => "спорткар",
            Self::Limousine => "лимузин",
            Self::Sedan => "седан",
            Self::Minibus => "микроавтобус",
            Self::Roadster => "родстер",
            Self::Minivan => "минивэн",
            Self::Pickup => "пикап",
        }
    }
}

catalog_string_impls!(BodyStyle, lookup_normalized);

// --- Rubber ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RubberKind {
    Summer,
    Winter,
    AllSeason,
    Sport,
    OffRoad,
    Karting,
    Premium,
    Eco,
    Modular,
}

impl Catalog for RubberKind {
    const ATTRIBUTE: AttributeKind = AttributeKind::RubberKind;
    const ALL: &'static [Self] = &[
        Self::Summer,
        Self::Winter,
        Self::AllSeason,
        Self::Sport,
        Self::OffRoad,
        Self::Karting,
        Self::Premium,
        Self::Eco,
        Self::Modular,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => "летняя",
            Self::Winter => "зимняя",
            Self::AllSeason => "всесезонная",
            Self::Sport => "спортивная",
            Self::OffRoad => "внедорожная",
            Self::Karting => "картинговая",
            Self::Premium => "премиум",
            Self::Eco => "эко",
            Self::Modular => "модулярная",
        }
    }
}

catalog_string_impls!(RubberKind, lookup_exact);
