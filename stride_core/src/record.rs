//! The parse/summarize capability shared by every record shape.
//!
//! Raw records are comma-separated with no escaping and no whitespace
//! tolerance: `3456,Ходьба,3h00m` or `678,0h50m`.

use crate::{Error, PersonalProfile, Result, TimeSpan};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A record shape that can be parsed from one raw line and summarized
pub trait ActivityRecord: Sized {
    /// Selector identifying this record shape
    const KIND: RecordKind;

    /// Build a record from one raw line
    ///
    /// Only structural and type validation happens here. Derived values and
    /// duration positivity are checked by [`ActivityRecord::summarize`].
    fn parse(profile: PersonalProfile, line: &str) -> Result<Self>;

    /// Render the multi-line report for this record
    fn summarize(&self) -> Result<String>;
}

/// Selects which record shape a batch of lines holds
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Training,
    DaySteps,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Training => f.write_str("training"),
            RecordKind::DaySteps => f.write_str("day-steps"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "training" => Ok(RecordKind::Training),
            "day-steps" | "day_steps" | "steps" => Ok(RecordKind::DaySteps),
            other => Err(Error::Config(format!(
                "unknown record kind {:?} (expected training or day-steps)",
                other
            ))),
        }
    }
}

/// Split a raw line on commas, requiring exactly `expected` fields
pub(crate) fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != expected {
        return Err(Error::Format {
            expected,
            actual: fields.len(),
            data: line.to_string(),
        });
    }
    Ok(fields)
}

/// Parse the step-count field
pub(crate) fn parse_steps(field: &str) -> Result<i64> {
    field
        .parse::<i64>()
        .map_err(|e| Error::parse("steps", field, e))
}

/// Parse the duration field
pub(crate) fn parse_duration(field: &str) -> Result<TimeSpan> {
    TimeSpan::parse(field)
}
