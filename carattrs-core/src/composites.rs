//! Composites - Engine, Body, Wheel, Car
//!
//! Built from attributes that are already valid, so construction cannot fail.
//! Composites only format what they hold.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::{DoorCount, EnginePower, WheelDiameter};
use crate::catalog::{BodyStyle, FuelKind, RubberKind};

/// Every wheel slot of a car carries the same wheel type.
pub const WHEELS_PER_CAR: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    max_power: EnginePower,
    fuel_kind: FuelKind,
}

impl Engine {
    pub fn new(max_power: EnginePower, fuel_kind: FuelKind) -> Self {
        Self { max_power, fuel_kind }
    }

    pub fn max_power(&self) -> EnginePower {
        self.max_power
    }

    pub fn fuel_kind(&self) -> FuelKind {
        self.fuel_kind
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hp, тип топлива: {}.", self.max_power, self.fuel_kind.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarBody {
    style: BodyStyle,
    doors: DoorCount,
}

impl CarBody {
    pub fn new(style: BodyStyle, doors: DoorCount) -> Self {
        Self { style, doors }
    }

    pub fn style(&self) -> BodyStyle {
        self.style
    }

    pub fn doors(&self) -> DoorCount {
        self.doors
    }
}

impl fmt::Display for CarBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Тип кузова - {}, количество дверей - {}.", self.style, self.doors)
    }
}

/// One wheel type. Its description covers all [`WHEELS_PER_CAR`] slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    diameter: WheelDiameter,
    rubber: RubberKind,
}

impl Wheel {
    pub fn new(diameter: WheelDiameter, rubber: RubberKind) -> Self {
        Self { diameter, rubber }
    }

    pub fn diameter(&self) -> WheelDiameter {
        self.diameter
    }

    pub fn rubber(&self) -> RubberKind {
        self.rubber
    }

    /// Description of a single wheel, without a trailing newline
    pub fn line(&self) -> String {
        format!("Диаметр колеса: {}, резина - {}", self.diameter, self.rubber)
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line();
        for _ in 0..WHEELS_PER_CAR {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Car {
    engine: Engine,
    body: CarBody,
    wheel: Wheel,
}

impl Car {
    pub fn new(engine: Engine, body: CarBody, wheel: Wheel) -> Self {
        Self { engine, body, wheel }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn body(&self) -> &CarBody {
        &self.body
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }
}

/// Engine, body and wheel blocks, in that order.
impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.engine)?;
        writeln!(f, "{}", self.body)?;
        write!(f, "{}", self.wheel)
    }
}
