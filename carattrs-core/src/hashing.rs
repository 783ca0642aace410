//! Hashing System - SHA-256 Fingerprints
//!
//! Two equal car specifications always produce the same fingerprint.

use sha2::{Digest, Sha256};

use crate::catalog::Catalog;
use crate::composites::Car;
use crate::validation::AttributeKind;

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// One `name=value` pair per attribute, in `AttributeKind::ALL` order, joined by `;`.
///
/// Values use the catalog identifiers and the numeric display form, so
/// `150` and `150.0`, or `"Дизель"` and `"diesel"`, give the same text.
pub fn canonical_form(car: &Car) -> String {
    AttributeKind::ALL
        .iter()
        .map(|attribute| format!("{}={}", attribute, attribute_value(car, *attribute)))
        .collect::<Vec<_>>()
        .join(";")
}

fn attribute_value(car: &Car, attribute: AttributeKind) -> String {
    match attribute {
        AttributeKind::MaxPower => car.engine().max_power().to_string(),
        AttributeKind::FuelKind => car.engine().fuel_kind().as_str().to_string(),
        AttributeKind::BodyStyle => car.body().style().as_str().to_string(),
        AttributeKind::DoorCount => car.body().doors().to_string(),
        AttributeKind::WheelDiameter => car.wheel().diameter().to_string(),
        AttributeKind::RubberKind => car.wheel().rubber().as_str().to_string(),
    }
}

/// Fingerprint of a car: sha256(canonical_form(car))
pub fn fingerprint(car: &Car) -> String {
    sha256_hex(canonical_form(car).as_bytes())
}
