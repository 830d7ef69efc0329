//! Batch processing of raw record lines.
//!
//! Each line is parsed and summarized on its own. A failing line is reported
//! and skipped; it never aborts the batch or affects other lines.

use crate::{
    ActivityRecord, DayStepsRecord, Error, PersonalProfile, RecordKind, Result, TrainingRecord,
};
use std::io::Write;

/// Result of processing a single line
#[derive(Debug)]
pub struct RecordOutcome {
    /// 1-based position of the line in the batch
    pub position: usize,
    pub input: String,
    pub result: Result<String>,
}

impl RecordOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// Ordered outcomes of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Successful summaries, in input order
    pub fn summaries(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(String::as_str))
    }

    /// Write summaries to `out` and one line per failed record to `err`
    pub fn write_to<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<()> {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(summary) => writeln!(out, "{}", summary)?,
                Err(e) => writeln!(err, "record {}: {}", outcome.position, e)?,
            }
        }
        out.flush()?;
        err.flush()?;
        Ok(())
    }
}

/// Parse and summarize every line as record shape `R`
pub fn process<R, S>(profile: &PersonalProfile, lines: &[S]) -> BatchReport
where
    R: ActivityRecord,
    S: AsRef<str>,
{
    tracing::info!("Processing {} {} records", lines.len(), R::KIND);

    let outcomes: Vec<RecordOutcome> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let input = line.as_ref();
            let position = idx + 1;
            let result = R::parse(profile.clone(), input).and_then(|record| record.summarize());

            match &result {
                Ok(_) => tracing::debug!("Record {} summarized", position),
                // User-facing error line comes from BatchReport::write_to
                Err(e) => tracing::debug!("Record {} ({:?}) skipped: {}", position, input, e),
            }

            RecordOutcome {
                position,
                input: input.to_string(),
                result,
            }
        })
        .collect();

    let report = BatchReport { outcomes };
    tracing::info!(
        "Batch finished: {} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );
    report
}

/// Dispatch a batch to the record shape chosen at runtime
pub fn process_kind<S: AsRef<str>>(
    kind: RecordKind,
    profile: &PersonalProfile,
    lines: &[S],
) -> BatchReport {
    match kind {
        RecordKind::Training => process::<TrainingRecord, S>(profile, lines),
        RecordKind::DaySteps => process::<DayStepsRecord, S>(profile, lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PersonalProfile {
        PersonalProfile::new("Test", 70.0, 1.75)
    }

    #[test]
    fn test_malformed_record_is_isolated() {
        crate::logging::init_test();

        let lines = [
            "3456,Ходьба,3h00m",
            "3456,Плавание,3h00m",
            "12000,Бег,1h00m",
            "800,Ходьба,0h30m",
        ];
        let report = process::<TrainingRecord, _>(&profile(), &lines);

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.succeeded(), 3);
        assert_eq!(report.failed(), 1);

        let positions: Vec<_> = report.outcomes.iter().map(|o| o.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
        assert!(matches!(
            report.outcomes[1].error(),
            Some(Error::UnknownActivity(token)) if token == "Плавание"
        ));
        assert_eq!(report.outcomes[1].input, "3456,Плавание,3h00m");

        // Surviving summaries match processing each line alone
        for (idx, line) in lines.iter().enumerate() {
            let alone = process::<TrainingRecord, _>(&profile(), &[line]);
            let alone = alone.outcomes[0].result.as_ref().ok();
            assert_eq!(report.outcomes[idx].result.as_ref().ok(), alone);
        }
    }

    #[test]
    fn test_summarize_failures_do_not_abort() {
        let lines = vec!["678,0h50m".to_string(), "100,0h00m".into(), "900,1h00m".into()];
        let report = process_kind(RecordKind::DaySteps, &profile(), &lines);

        assert_eq!(report.succeeded(), 2);
        assert!(matches!(
            report.outcomes[1].error(),
            Some(Error::InvalidDuration)
        ));
        let summaries: Vec<_> = report.summaries().collect();
        assert!(summaries[0].starts_with("Steps: 678\n"));
        assert!(summaries[1].starts_with("Steps: 900\n"));
    }

    #[test]
    fn test_empty_batch() {
        let lines: [&str; 0] = [];
        let report = process_kind(RecordKind::Training, &profile(), &lines);
        assert!(report.outcomes.is_empty());
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn test_write_to_splits_streams() {
        let lines = ["678,0h50m", "oops", "1000,0h10m"];
        let report = process_kind(RecordKind::DaySteps, &profile(), &lines);

        let mut out = Vec::new();
        let mut err = Vec::new();
        report.write_to(&mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();

        assert_eq!(out.matches("Steps: ").count(), 2);
        assert!(out.find("Steps: 678").unwrap() < out.find("Steps: 1000").unwrap());
        assert_eq!(err.lines().count(), 1);
        assert!(err.starts_with("record 2: invalid data format: expected 2 values, got 1"));
    }
}
