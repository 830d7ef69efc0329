//! Core domain types for Stride.
//!
//! This module defines the values shared by every record shape:
//! - The personal profile embedded into each record
//! - Activity kinds and their fixed source labels

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source token for a walking training session
pub const WALKING_LABEL: &str = "Ходьба";

/// Source token for a running training session
pub const RUNNING_LABEL: &str = "Бег";

// ============================================================================
// Profile
// ============================================================================

/// Personal body metrics of the user who recorded the activity
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonalProfile {
    pub name: String,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in meters
    pub height: f64,
}

impl PersonalProfile {
    pub fn new(name: impl Into<String>, weight: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            height,
        }
    }

    /// Render the 3-line profile banner (name, weight, height)
    pub fn banner(&self) -> String {
        format!(
            "Name: {}\nWeight: {:.2} kg\nHeight: {:.2} m",
            self.name, self.weight, self.height
        )
    }
}

// ============================================================================
// Activity Kinds
// ============================================================================

/// Type of training session, each with its own calorie formula
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    /// The literal token used for this kind in raw records
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Walking => WALKING_LABEL,
            ActivityKind::Running => RUNNING_LABEL,
        }
    }

    /// Strictly map a raw record token to an activity kind
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            WALKING_LABEL => Ok(ActivityKind::Walking),
            RUNNING_LABEL => Ok(ActivityKind::Running),
            other => Err(Error::UnknownActivity(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Walking => f.write_str("Walking"),
            ActivityKind::Running => f.write_str("Running"),
        }
    }
}
