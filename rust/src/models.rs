//! Core data types for the exam roadmap.

use chrono::NaiveDate;
use std::fmt;

use crate::registry::RegistryError;

/// Difficulty tier of an exam. Each tier maps to a fixed preparation window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Light = 1,
    Moderate = 2,
    Heavy = 3,
}

impl Difficulty {
    /// The highest tier; its tasks are flagged as priority.
    pub const MAX: Difficulty = Difficulty::Heavy;

    /// Parse a numeric tier (1-3).
    pub fn from_tier(tier: i64) -> Result<Self, RegistryError> {
        match tier {
            1 => Ok(Self::Light),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Heavy),
            other => Err(RegistryError::InvalidDifficulty(other)),
        }
    }

    /// Numeric tier (1-3).
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// Total preparation window in days.
    pub fn total_days(self) -> u32 {
        match self {
            Self::Light => 7,
            Self::Moderate => 10,
            Self::Heavy => 14,
        }
    }
}

/// An exam to prepare for.
///
/// Construct through [`Exam::new`], which rejects blank names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exam {
    name: String,
    date: NaiveDate,
    difficulty: Difficulty,
}

impl Exam {
    /// Create an exam. The name is trimmed; a blank name is rejected.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        difficulty: Difficulty,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_string(),
            date,
            difficulty,
        })
    }

    /// Create an exam from a numeric tier.
    pub fn with_tier(
        name: impl Into<String>,
        date: NaiveDate,
        tier: i64,
    ) -> Result<Self, RegistryError> {
        Self::new(name, date, Difficulty::from_tier(tier)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Total preparation window in days.
    pub fn total_days(&self) -> u32 {
        self.difficulty.total_days()
    }

    /// Whether this exam's tasks are priority tasks (maximum tier).
    pub fn is_priority(&self) -> bool {
        self.difficulty == Difficulty::MAX
    }
}

/// Study activity type of a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Simulation,
    Practice,
    Study,
    Refresh,
}

impl Phase {
    /// All phases in display order.
    pub const ALL: [Phase; 4] = [
        Phase::Simulation,
        Phase::Practice,
        Phase::Study,
        Phase::Refresh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simulation => "Simulation",
            Self::Practice => "Practice",
            Self::Study => "Study",
            Self::Refresh => "Refresh",
        }
    }

    /// Display colour (hex RGB) used by the presentation layer.
    pub fn color(self) -> &'static str {
        match self {
            Self::Simulation => "#DC2626",
            Self::Practice => "#D97706",
            Self::Study => "#2563EB",
            Self::Refresh => "#10B981",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable task identifier: `<exam>_<Phase>_<index>`.
///
/// Ids only depend on the exam name, the phase and the slot index, so they
/// survive re-scheduling and can key overrides and completion state.
pub fn task_id(exam_name: &str, phase: Phase, index: usize) -> String {
    format!("{}_{}_{}", exam_name, phase, index)
}

/// A dated study task produced by the scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub exam_name: String,
    pub date: NaiveDate,
    pub phase: Phase,
    pub is_priority: bool,
    /// Date came from a manual override rather than automatic placement.
    pub is_moved: bool,
}

impl Task {
    /// Label used by calendar exports, e.g. `Math (Simulation)`.
    pub fn subject_label(&self) -> String {
        format!("{} ({})", self.exam_name, self.phase)
    }
}

/// Number of days allotted to each automatically placed phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseCounts {
    pub simulation: u32,
    pub practice: u32,
    pub study: u32,
}

impl PhaseCounts {
    pub fn total(&self) -> u32 {
        self.simulation + self.practice + self.study
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_tier_windows() {
        assert_eq!(Difficulty::from_tier(1).unwrap().total_days(), 7);
        assert_eq!(Difficulty::from_tier(2).unwrap().total_days(), 10);
        assert_eq!(Difficulty::from_tier(3).unwrap().total_days(), 14);
    }

    #[test]
    fn test_invalid_tier() {
        assert_eq!(
            Difficulty::from_tier(0),
            Err(RegistryError::InvalidDifficulty(0))
        );
        assert_eq!(
            Difficulty::from_tier(4),
            Err(RegistryError::InvalidDifficulty(4))
        );
        assert_eq!(
            Difficulty::from_tier(-1),
            Err(RegistryError::InvalidDifficulty(-1))
        );
        assert_eq!(
            Difficulty::from_tier(256),
            Err(RegistryError::InvalidDifficulty(256))
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Exam::new("   ", d(2025, 6, 1), Difficulty::Light);
        assert_eq!(result, Err(RegistryError::EmptyName));
    }

    #[test]
    fn test_name_trimmed() {
        let exam = Exam::with_tier("  Math ", d(2025, 6, 1), 3).unwrap();
        assert_eq!(exam.name(), "Math");
        assert!(exam.is_priority());
        assert_eq!(exam.total_days(), 14);
    }

    #[test]
    fn test_task_id_format() {
        assert_eq!(task_id("Math", Phase::Simulation, 0), "Math_Simulation_0");
        assert_eq!(task_id("Physics", Phase::Refresh, 2), "Physics_Refresh_2");
    }

    #[test]
    fn test_subject_label() {
        let task = Task {
            id: task_id("Math", Phase::Study, 1),
            exam_name: "Math".to_string(),
            date: d(2025, 6, 1),
            phase: Phase::Study,
            is_priority: false,
            is_moved: false,
        };
        assert_eq!(task.subject_label(), "Math (Study)");
    }
}
