//! Daily step logs: steps and walking duration.

use crate::energy::{distance, walking_calories};
use crate::record::{parse_duration, parse_steps, split_fields};
use crate::{ActivityRecord, Error, PersonalProfile, RecordKind, Result, TimeSpan};

const FIELD_COUNT: usize = 2;

/// A day's walk, parsed from `steps,duration`
#[derive(Clone, Debug, PartialEq)]
pub struct DayStepsRecord {
    pub profile: PersonalProfile,
    pub steps: i64,
    pub duration: TimeSpan,
}

impl ActivityRecord for DayStepsRecord {
    const KIND: RecordKind = RecordKind::DaySteps;

    fn parse(profile: PersonalProfile, line: &str) -> Result<Self> {
        let fields = split_fields(line, FIELD_COUNT)?;
        let steps = parse_steps(fields[0])?;
        let duration = parse_duration(fields[1])?;

        tracing::debug!(steps, %duration, "Parsed day steps record");

        Ok(Self {
            profile,
            steps,
            duration,
        })
    }

    fn summarize(&self) -> Result<String> {
        if !self.duration.is_positive() {
            return Err(Error::InvalidDuration);
        }

        let distance = distance(self.steps);
        let calories = walking_calories(
            self.steps,
            self.profile.weight,
            self.profile.height,
            self.duration,
        )?;

        Ok(format!(
            "Steps: {}\nDistance: {:.2} km\nCalories burned: {:.2} kcal",
            self.steps, distance, calories
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PersonalProfile {
        PersonalProfile::new("Test", 70.0, 1.75)
    }

    #[test]
    fn test_parse() {
        let record = DayStepsRecord::parse(profile(), "678,0h50m").unwrap();
        assert_eq!(record.steps, 678);
        assert_eq!(record.duration, TimeSpan::from_minutes(50));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        match DayStepsRecord::parse(profile(), "3456,Ходьба,3h00m") {
            Err(Error::Format {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("expected format error, got {:?}", other),
        }
        assert!(matches!(
            DayStepsRecord::parse(profile(), "678"),
            Err(Error::Format { actual: 1, .. })
        ));
    }

    #[test]
    fn test_parse_bad_fields() {
        assert!(matches!(
            DayStepsRecord::parse(profile(), "six,0h50m"),
            Err(Error::Parse { field: "steps", .. })
        ));
        assert!(matches!(
            DayStepsRecord::parse(profile(), "678,50"),
            Err(Error::Parse { field: "duration", .. })
        ));
    }

    #[test]
    fn test_summarize() {
        let record = DayStepsRecord::parse(profile(), "678,0h50m").unwrap();
        let summary = record.summarize().unwrap();
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Steps: 678");
        assert_eq!(lines[1], "Distance: 0.44 km");
        assert_eq!(lines[2], "Calories burned: 122.73 kcal");
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let record = DayStepsRecord::parse(profile(), "678,0h50m").unwrap();
        assert_eq!(record.summarize().unwrap(), record.summarize().unwrap());
    }

    #[test]
    fn test_summarize_non_positive_duration() {
        for line in ["678,0h00m", "678,0", "678,-10m"] {
            let record = DayStepsRecord::parse(profile(), line).unwrap();
            assert!(matches!(record.summarize(), Err(Error::InvalidDuration)));
        }
    }

    #[test]
    fn test_summarize_invalid_profile() {
        let record = DayStepsRecord::parse(PersonalProfile::new("Test", 0.0, 1.75), "678,0h50m")
            .unwrap();
        assert!(matches!(record.summarize(), Err(Error::InvalidInput(_))));
    }
}
