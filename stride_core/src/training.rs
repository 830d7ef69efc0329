//! Training sessions: steps, activity kind and duration.

use crate::energy::{distance, mean_speed, running_calories, walking_calories};
use crate::record::{parse_duration, parse_steps, split_fields};
use crate::{ActivityKind, ActivityRecord, Error, PersonalProfile, RecordKind, Result, TimeSpan};

const FIELD_COUNT: usize = 3;

/// One walking or running session, parsed from `steps,label,duration`
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingRecord {
    pub profile: PersonalProfile,
    pub steps: i64,
    pub kind: ActivityKind,
    pub duration: TimeSpan,
}

impl TrainingRecord {
    /// Calories for this session, using the formula for its activity kind
    pub fn calories(&self) -> Result<f64> {
        match self.kind {
            ActivityKind::Walking => walking_calories(
                self.steps,
                self.profile.weight,
                self.profile.height,
                self.duration,
            ),
            ActivityKind::Running => running_calories(self.steps, self.profile.weight, self.duration),
        }
    }
}

impl ActivityRecord for TrainingRecord {
    const KIND: RecordKind = RecordKind::Training;

    fn parse(profile: PersonalProfile, line: &str) -> Result<Self> {
        let fields = split_fields(line, FIELD_COUNT)?;
        let steps = parse_steps(fields[0])?;
        let kind = ActivityKind::from_label(fields[1])?;
        let duration = parse_duration(fields[2])?;

        tracing::debug!(steps, %kind, %duration, "Parsed training record");

        Ok(Self {
            profile,
            steps,
            kind,
            duration,
        })
    }

    /// The report names the activity in English (`Walking`); use
    /// [`ActivityKind::label`] for the raw record token (`Ходьба`).
    fn summarize(&self) -> Result<String> {
        if !self.duration.is_positive() {
            return Err(Error::InvalidDuration);
        }

        let distance = distance(self.steps);
        let speed = mean_speed(self.steps, self.duration);
        let calories = self.calories()?;

        Ok(format!(
            "Activity: {}\n\
             Duration: {:.2} h\n\
             Distance: {:.2} km\n\
             Speed: {:.2} km/h\n\
             Calories burned: {:.2} kcal",
            self.kind,
            self.duration.as_hours(),
            distance,
            speed,
            calories
        ))
    }
}
