//! Assembly - Single Entry Point
//!
//! Raw scalars in, validated `Car` out. Checks run in a fixed order and the
//! first failure aborts the whole assembly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attributes::{DoorCount, EnginePower, WheelDiameter};
use crate::composites::{Car, CarBody, Engine, Wheel};
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineRequest {
    pub max_power: f64,
    pub fuel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRequest {
    pub style: String,
    pub doors: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelRequest {
    pub diameter: f64,
    pub rubber: String,
}

/// Unvalidated description of a car, grouped by composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRequest {
    pub engine: EngineRequest,
    pub body: BodyRequest,
    pub wheel: WheelRequest,
}

impl CarRequest {
    pub fn from_json(payload: &str) -> Result<Self, AssemblyError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// The demonstration car: 150 hp diesel hatchback, 4 doors, 45 summer wheels.
impl Default for CarRequest {
    fn default() -> Self {
        Self {
            engine: EngineRequest {
                max_power: 150.0,
                fuel: "diesel".to_string(),
            },
            body: BodyRequest {
                style: "хетчбэк".to_string(),
                doors: 4.0,
            },
            wheel: WheelRequest {
                diameter: 45.0,
                rubber: "летняя".to_string(),
            },
        }
    }
}

/// Validate every attribute of `request` and build the car.
///
/// Order: power, fuel, style, doors, diameter, rubber.
pub fn assemble(request: &CarRequest) -> Result<Car, ValidationError> {
    let _span = tracing::info_span!("assemble").entered();

    let engine = Engine::new(
        EnginePower::new(request.engine.max_power)?,
        request.engine.fuel.parse()?,
    );
    let body = CarBody::new(
        request.body.style.parse()?,
        DoorCount::from_f64(request.body.doors)?,
    );
    let wheel = Wheel::new(
        WheelDiameter::new(request.wheel.diameter)?,
        request.wheel.rubber.parse()?,
    );

    tracing::info!("car assembled");
    Ok(Car::new(engine, body, wheel))
}

/// Parse a `CarRequest` payload and assemble it.
pub fn assemble_json(payload: &str) -> Result<Car, AssemblyError> {
    let request = CarRequest::from_json(payload)?;
    Ok(assemble(&request)?)
}
