//! Exam preparation roadmap: data types and the date-allocation scheduler.
//!
//! Given a set of exams (subject, date, difficulty), allocates a preparation
//! window per exam, splits it into Simulation, Practice and Study phases,
//! and assigns each day to a calendar date working backward from the test.
//! Long gaps are filled with Refresh tasks.
//!
//! Enable the `python` feature for the PyO3 bindings used by the front end.

pub mod budget;
mod config;
pub mod export;
pub mod logging;
mod models;
pub mod registry;
pub mod scheduler;
pub mod views;

#[cfg(feature = "python")]
mod python;

pub use budget::{counts_for, phase_counts, MIN_SIMULATION_DAYS};
pub use config::{RoadmapConfig, DEFAULT_REFRESH_GAP_DAYS};
pub use export::{calendar_csv, EXPORT_FILE_NAME, EXPORT_HEADER};
pub use models::{task_id, Difficulty, Exam, Phase, PhaseCounts, Task};
pub use registry::{ExamRegistry, OverrideMap, RegistryError};
pub use scheduler::{build_roadmap, RoadmapScheduler};
pub use views::{countdown, daily_roadmap, subject_summaries, Countdown, SubjectSummary};
