//! Energy formulas: distance, mean speed and calories burned.
//!
//! All functions are pure. Constants are fixed physiological approximations.

use crate::{Error, Result, TimeSpan};

/// Average step length in meters
pub const STEP_LENGTH_M: f64 = 0.65;

/// Meters in a kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Body weight multiplier for walking calories
pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Speed-over-height multiplier for walking calories
pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Mean speed multiplier for running calories
pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;

/// Shift subtracted from the running speed term
pub const RUNNING_SPEED_SHIFT: f64 = 20.0;

/// Distance in kilometers covered by the given number of steps
pub fn distance(steps: i64) -> f64 {
    steps as f64 * STEP_LENGTH_M / METERS_PER_KM
}

/// Mean speed in km/h over the given duration
///
/// Returns 0 for a zero or negative duration instead of failing.
pub fn mean_speed(steps: i64, duration: TimeSpan) -> f64 {
    if !duration.is_positive() {
        return 0.0;
    }
    distance(steps) / duration.as_hours()
}

/// Calories (kcal) spent walking
///
/// # Errors
/// `InvalidInput` if weight or height is not positive, or the duration is
/// zero or negative.
pub fn walking_calories(steps: i64, weight: f64, height: f64, duration: TimeSpan) -> Result<f64> {
    if height <= 0.0 || weight <= 0.0 {
        return Err(Error::InvalidInput(
            "height and weight must be greater than zero".into(),
        ));
    }
    if !duration.is_positive() {
        return Err(Error::InvalidInput(
            "duration must be greater than zero".into(),
        ));
    }

    let speed = mean_speed(steps, duration);
    let calories = (WALKING_WEIGHT_MULTIPLIER * weight
        + (speed * speed / height) * WALKING_SPEED_HEIGHT_MULTIPLIER)
        * duration.as_hours()
        * MINUTES_PER_HOUR;
    Ok(calories)
}

/// Calories (kcal) spent running
///
/// # Errors
/// `InvalidInput` if weight is not positive or the duration is zero or
/// negative.
pub fn running_calories(steps: i64, weight: f64, duration: TimeSpan) -> Result<f64> {
    if weight <= 0.0 {
        return Err(Error::InvalidInput("weight must be greater than zero".into()));
    }
    if !duration.is_positive() {
        return Err(Error::InvalidInput(
            "duration must be greater than zero".into(),
        ));
    }

    let speed = mean_speed(steps, duration);
    Ok((RUNNING_SPEED_MULTIPLIER * speed - RUNNING_SPEED_SHIFT) * weight)
}
