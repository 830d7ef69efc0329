#![forbid(unsafe_code)]

//! Core domain model and computation pipeline for Stride.
//!
//! This crate provides:
//! - Domain types (personal profile, activity kinds, time spans)
//! - Energy formulas (distance, mean speed, calories)
//! - Record parsing and summaries (training sessions, daily steps)
//! - Batch processing with per-record failure isolation

pub mod types;
pub mod error;
pub mod timespan;
pub mod energy;
pub mod config;
pub mod logging;
pub mod record;
pub mod training;
pub mod day_steps;
pub mod batch;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use timespan::TimeSpan;
pub use config::Config;
pub use record::{ActivityRecord, RecordKind};
pub use training::TrainingRecord;
pub use day_steps::DayStepsRecord;
pub use batch::{process, process_kind, BatchReport, RecordOutcome};
