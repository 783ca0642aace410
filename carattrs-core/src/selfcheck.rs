//! Self-Check - Built-In Validation Examples
//!
//! A fixed table of raw inputs with their expected verdicts.
//! Running it re-exercises every rule and reports any case that misbehaves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::check_raw;
use crate::validation::AttributeKind;
use crate::validation::AttributeKind::*;
use crate::CRATE_VERSION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelfCheckCase {
    pub attribute: AttributeKind,
    pub input: &'static str,
    pub expected: Verdict,
}

const fn accept(attribute: AttributeKind, input: &'static str) -> SelfCheckCase {
    SelfCheckCase { attribute, input, expected: Verdict::Accepted }
}

const fn reject(attribute: AttributeKind, input: &'static str) -> SelfCheckCase {
    SelfCheckCase { attribute, input, expected: Verdict::Rejected }
}

pub const CASES: &[SelfCheckCase] = &[
    accept(MaxPower, "150"),
    accept(MaxPower, "1"),
    accept(MaxPower, "200"),
    reject(MaxPower, "0"),
    reject(MaxPower, "201"),
    reject(MaxPower, "250"),
    accept(FuelKind, "diesel"),
    accept(FuelKind, "Электричество"),
    reject(FuelKind, "керосин"),
    accept(BodyStyle, "лимузин"),
    accept(BodyStyle, "  ХЕТЧБЭК "),
    reject(BodyStyle, "спортивный"),
    accept(DoorCount, "4"),
    accept(DoorCount, "2"),
    accept(DoorCount, "5"),
    reject(DoorCount, "6"),
    reject(DoorCount, "1"),
    accept(WheelDiameter, "38"),
    accept(WheelDiameter, "33"),
    accept(WheelDiameter, "45"),
    reject(WheelDiameter, "30"),
    reject(WheelDiameter, "32"),
    reject(WheelDiameter, "46"),
    reject(WheelDiameter, "48"),
    accept(RubberKind, "картинговая"),
    reject(RubberKind, "с высоким сцеплением"),
];

/// A case whose actual verdict or message differed from the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFailure {
    pub attribute: AttributeKind,
    pub input: String,
    pub expected: Verdict,
    pub actual: Verdict,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfCheckReport {
    pub passed: bool,
    pub total: usize,
    pub failures: Vec<CaseFailure>,
    pub crate_version: String,
    pub checked_at: DateTime<Utc>,
}

impl SelfCheckReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for SelfCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Self-check: {}/{} cases passed",
            self.total - self.failed(),
            self.total
        )?;
        for failure in &self.failures {
            write!(
                f,
                "  {} {:?}: expected {:?}, got {:?}",
                failure.attribute, failure.input, failure.expected, failure.actual
            )?;
            if let Some(message) = &failure.message {
                write!(f, " ({})", message)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn run_self_check() -> SelfCheckReport {
    run_cases(CASES)
}

pub fn run_cases(cases: &[SelfCheckCase]) -> SelfCheckReport {
    let failures: Vec<_> = cases.iter().filter_map(evaluate).collect();

    if !failures.is_empty() {
        tracing::warn!(failed = failures.len(), total = cases.len(), "self-check failed");
    }

    SelfCheckReport {
        passed: failures.is_empty(),
        total: cases.len(),
        failures,
        crate_version: CRATE_VERSION.to_string(),
        checked_at: Utc::now(),
    }
}

fn evaluate(case: &SelfCheckCase) -> Option<CaseFailure> {
    let (actual, message) = match check_raw(case.attribute, case.input) {
        Ok(_) => (Verdict::Accepted, None),
        // Rejected by a different attribute than the one under test
        Err(e) if e.attribute != case.attribute => {
            return Some(CaseFailure {
                attribute: case.attribute,
                input: case.input.to_string(),
                expected: case.expected,
                actual: Verdict::Rejected,
                message: Some(e.to_string()),
            });
        }
        Err(e) => (Verdict::Rejected, Some(e.to_string())),
    };

    if actual == case.expected {
        return None;
    }

    Some(CaseFailure {
        attribute: case.attribute,
        input: case.input.to_string(),
        expected: case.expected,
        actual,
        message,
    })
}
