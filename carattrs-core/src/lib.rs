//! Car Attributes Core - Validated Value Objects
//!
//! # The Four Rules
//! 1. Attributes Are Checked Once, At Creation
//! 2. Closed Sets Are Types
//! 3. Composites Never Validate
//! 4. First Failure Aborts

pub mod validation;
pub mod catalog;
pub mod attributes;
pub mod composites;
pub mod assembly;
pub mod selfcheck;
pub mod hashing;
pub mod render;

pub use validation::{AttributeKind, RangeRule, ValidationError};
pub use catalog::{BodyStyle, Catalog, FuelKind, RubberKind};
pub use attributes::{check_raw, DoorCount, EnginePower, WheelDiameter};
pub use composites::{Car, CarBody, Engine, Wheel, WHEELS_PER_CAR};
pub use assembly::{assemble, assemble_json, AssemblyError, CarRequest};
pub use selfcheck::{run_self_check, SelfCheckReport};
pub use hashing::{canonical_form, fingerprint};
pub use render::{render_car, render_report, OutputFormat};

pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
