//! Exam registry: the session store owned by the presentation layer.
//!
//! Holds the exam list plus the two maps keyed by task id (manual overrides
//! and completion flags). The scheduler reads exams and overrides from here
//! but never mutates the registry.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::config::RoadmapConfig;
use crate::models::{Difficulty, Exam, Task};
use crate::scheduler::RoadmapScheduler;

/// Errors raised while registering exams.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Exam already registered: {0}")]
    DuplicateExam(String),
    #[error("Invalid difficulty tier {0}: expected 1, 2 or 3")]
    InvalidDifficulty(i64),
    #[error("Exam name must not be blank")]
    EmptyName,
}

/// Manual override map: task id -> pinned date.
pub type OverrideMap = FxHashMap<String, NaiveDate>;

/// Registered exams with their overrides and completion state.
#[derive(Clone, Debug, Default)]
pub struct ExamRegistry {
    exams: Vec<Exam>,
    overrides: OverrideMap,
    completed: FxHashMap<String, bool>,
}

impl ExamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register an exam from raw inputs.
    pub fn add(&mut self, name: &str, date: NaiveDate, tier: i64) -> Result<&Exam, RegistryError> {
        let exam = Exam::new(name, date, Difficulty::from_tier(tier)?)?;
        self.add_exam(exam)
    }

    /// Register an already constructed exam.
    ///
    /// Names are unique case-insensitively; a duplicate leaves the registry
    /// untouched.
    pub fn add_exam(&mut self, exam: Exam) -> Result<&Exam, RegistryError> {
        if self.contains(exam.name()) {
            return Err(RegistryError::DuplicateExam(exam.name().to_string()));
        }
        self.exams.push(exam);
        Ok(&self.exams[self.exams.len() - 1])
    }

    /// Case-insensitive name lookup.
    pub fn contains(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.exams.iter().any(|e| e.name().to_lowercase() == needle)
    }

    /// Drop every exam together with all overrides and completion flags.
    pub fn remove_all(&mut self) {
        self.exams.clear();
        self.overrides.clear();
        self.completed.clear();
    }

    /// Exams in insertion order.
    pub fn list(&self) -> &[Exam] {
        &self.exams
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }

    /// Pin a task to a date. Takes effect on the next scheduling run.
    pub fn set_override(&mut self, task_id: impl Into<String>, date: NaiveDate) {
        self.overrides.insert(task_id.into(), date);
    }

    /// Remove a pinned date, returning it if one was set.
    pub fn clear_override(&mut self, task_id: &str) -> Option<NaiveDate> {
        self.overrides.remove(task_id)
    }

    pub fn overrides(&self) -> &OverrideMap {
        &self.overrides
    }

    pub fn set_completed(&mut self, task_id: impl Into<String>, done: bool) {
        self.completed.insert(task_id.into(), done);
    }

    pub fn is_completed(&self, task_id: &str) -> bool {
        self.completed.get(task_id).copied().unwrap_or(false)
    }

    /// Run the scheduler over the current exams and overrides.
    pub fn roadmap(&self, config: &RoadmapConfig) -> Vec<Task> {
        RoadmapScheduler::new(&self.exams, &self.overrides, config.clone()).schedule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_add_and_list_in_insertion_order() {
        let mut registry = ExamRegistry::new();
        registry.add("Physics", d(2025, 6, 20), 1).unwrap();
        registry.add("Math", d(2025, 6, 10), 3).unwrap();

        let names: Vec<&str> = registry.list().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Physics", "Math"]);
    }

    #[test]
    fn test_duplicate_is_case_insensitive() {
        let mut registry = ExamRegistry::new();
        registry.add("Math", d(2025, 6, 10), 3).unwrap();

        let err = registry.add("mATH", d(2025, 7, 1), 1).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateExam("mATH".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list()[0].date(), d(2025, 6, 10));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut registry = ExamRegistry::new();
        assert_eq!(
            registry.add("Math", d(2025, 6, 10), 5).unwrap_err(),
            RegistryError::InvalidDifficulty(5)
        );
        assert_eq!(
            registry.add(" \t", d(2025, 6, 10), 1).unwrap_err(),
            RegistryError::EmptyName
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_all_clears_overrides_and_completion() {
        let mut registry = ExamRegistry::new();
        registry.add("Math", d(2025, 6, 10), 1).unwrap();
        registry.set_override("Math_Study_0", d(2025, 5, 1));
        registry.set_completed("Math_Simulation_0", true);

        registry.remove_all();

        assert!(registry.is_empty());
        assert!(registry.overrides().is_empty());
        assert!(!registry.is_completed("Math_Simulation_0"));
    }

    #[test]
    fn test_clear_override() {
        let mut registry = ExamRegistry::new();
        registry.set_override("Math_Study_0", d(2025, 5, 1));
        assert_eq!(registry.clear_override("Math_Study_0"), Some(d(2025, 5, 1)));
        assert_eq!(registry.clear_override("Math_Study_0"), None);
    }

    #[test]
    fn test_completion_survives_rescheduling() {
        let mut registry = ExamRegistry::new();
        registry.add("Math", d(2025, 6, 10), 1).unwrap();
        let config = RoadmapConfig::default();

        let first = registry.roadmap(&config);
        let sim_id = first
            .iter()
            .find(|t| t.phase == Phase::Simulation)
            .map(|t| t.id.clone())
            .unwrap();
        registry.set_completed(sim_id.clone(), true);

        registry.add("Physics", d(2025, 6, 30), 2).unwrap();
        let second = registry.roadmap(&config);
        assert!(second.iter().any(|t| t.id == sim_id));
        assert!(registry.is_completed(&sim_id));
    }

    #[test]
    fn test_roadmap_honors_override() {
        let mut registry = ExamRegistry::new();
        registry.add("Math", d(2025, 6, 10), 1).unwrap();
        registry.set_override("Math_Practice_1", d(2025, 5, 20));

        let tasks = registry.roadmap(&RoadmapConfig::default());
        let moved = tasks.iter().find(|t| t.id == "Math_Practice_1").unwrap();
        assert_eq!(moved.date, d(2025, 5, 20));
        assert!(moved.is_moved);
    }
}
