//! Output Rendering
//!
//! One place decides how cars and reports reach the console.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::composites::Car;
use crate::hashing::fingerprint;
use crate::selfcheck::SelfCheckReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain descriptions, one block per composite
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Render a car, optionally followed by its fingerprint.
pub fn render_car(
    car: &Car,
    format: OutputFormat,
    with_fingerprint: bool,
) -> Result<String, serde_json::Error> {
    let digest = with_fingerprint.then(|| fingerprint(car));

    match format {
        OutputFormat::Text => {
            let mut out = format!("{}\n", car);
            if let Some(digest) = digest {
                out.push_str(&format!("Fingerprint: {}\n", digest));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(car)?;
            if let (Some(digest), Some(map)) = (digest, value.as_object_mut()) {
                map.insert("fingerprint".to_string(), serde_json::Value::String(digest));
            }
            serde_json::to_string_pretty(&value).map(|json| json + "\n")
        }
    }
}

pub fn render_report(
    report: &SelfCheckReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}
