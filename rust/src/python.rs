//! PyO3 bindings for the Python presentation layer.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::config::RoadmapConfig;
use crate::export::calendar_csv;
use crate::models::{Exam, Task};
use crate::registry::{ExamRegistry, OverrideMap, RegistryError};
use crate::scheduler::build_roadmap;
use crate::views::{
    countdown, daily_roadmap, subject_summaries, Countdown, PhaseSummary, SubjectSummary,
};

// Note: std HashMap at the boundary for PyO3 compatibility, FxHashMap inside

fn to_py_err(err: RegistryError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// An exam (PyO3 wrapper).
#[pyclass(name = "Exam")]
#[derive(Clone, Debug)]
pub struct PyExam {
    inner: Exam,
}

#[pymethods]
impl PyExam {
    #[new]
    fn new(name: String, date: NaiveDate, difficulty: i64) -> PyResult<Self> {
        let inner = Exam::with_tier(name, date, difficulty).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    #[getter]
    fn date(&self) -> NaiveDate {
        self.inner.date()
    }

    #[getter]
    fn difficulty(&self) -> u8 {
        self.inner.difficulty().tier()
    }

    #[getter]
    fn total_days(&self) -> u32 {
        self.inner.total_days()
    }

    fn __repr__(&self) -> String {
        format!(
            "Exam(name={:?}, date={}, difficulty={})",
            self.inner.name(),
            self.inner.date(),
            self.inner.difficulty().tier()
        )
    }
}

/// A scheduled task (PyO3 wrapper).
#[pyclass(name = "Task")]
#[derive(Clone, Debug)]
pub struct PyTask {
    inner: Task,
}

impl From<Task> for PyTask {
    fn from(inner: Task) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyTask {
    #[getter]
    fn id(&self) -> &str {
        &self.inner.id
    }

    #[getter]
    fn exam_name(&self) -> &str {
        &self.inner.exam_name
    }

    #[getter]
    fn date(&self) -> NaiveDate {
        self.inner.date
    }

    #[getter]
    fn phase(&self) -> &'static str {
        self.inner.phase.as_str()
    }

    #[getter]
    fn color(&self) -> &'static str {
        self.inner.phase.color()
    }

    #[getter]
    fn is_priority(&self) -> bool {
        self.inner.is_priority
    }

    #[getter]
    fn is_moved(&self) -> bool {
        self.inner.is_moved
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={:?}, date={}, phase={}, moved={})",
            self.inner.id, self.inner.date, self.inner.phase, self.inner.is_moved
        )
    }
}

/// Scheduling configuration (PyO3 wrapper).
#[pyclass(name = "RoadmapConfig")]
#[derive(Clone, Debug, Default)]
pub struct PyRoadmapConfig {
    inner: RoadmapConfig,
}

#[pymethods]
impl PyRoadmapConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, refresh_gap_days=None))]
    fn new(verbosity: Option<u8>, refresh_gap_days: Option<i64>) -> Self {
        Self {
            inner: RoadmapConfig::new(verbosity, refresh_gap_days),
        }
    }

    #[getter]
    fn verbosity(&self) -> u8 {
        self.inner.verbosity
    }

    #[setter]
    fn set_verbosity(&mut self, verbosity: u8) {
        self.inner.verbosity = verbosity;
    }

    #[getter]
    fn refresh_gap_days(&self) -> i64 {
        self.inner.refresh_gap_days
    }

    #[setter]
    fn set_refresh_gap_days(&mut self, days: i64) {
        self.inner.refresh_gap_days = days;
    }

    fn __repr__(&self) -> String {
        format!(
            "RoadmapConfig(verbosity={}, refresh_gap_days={})",
            self.inner.verbosity, self.inner.refresh_gap_days
        )
    }
}

/// One phase of a subject summary (PyO3 wrapper).
#[pyclass(name = "PhaseSummary")]
#[derive(Clone, Debug)]
pub struct PyPhaseSummary {
    inner: PhaseSummary,
}

#[pymethods]
impl PyPhaseSummary {
    #[getter]
    fn phase(&self) -> &'static str {
        self.inner.phase.as_str()
    }

    #[getter]
    fn color(&self) -> &'static str {
        self.inner.phase.color()
    }

    #[getter]
    fn first_date(&self) -> NaiveDate {
        self.inner.first_date
    }

    #[getter]
    fn last_date(&self) -> NaiveDate {
        self.inner.last_date
    }

    #[getter]
    fn count(&self) -> usize {
        self.inner.count
    }

    #[getter]
    fn percent_of_window(&self) -> u32 {
        self.inner.percent_of_window
    }

    fn __repr__(&self) -> String {
        format!(
            "PhaseSummary(phase={}, first={}, last={}, count={})",
            self.inner.phase, self.inner.first_date, self.inner.last_date, self.inner.count
        )
    }
}

/// Per-subject summary card (PyO3 wrapper).
#[pyclass(name = "SubjectSummary")]
#[derive(Clone, Debug)]
pub struct PySubjectSummary {
    inner: SubjectSummary,
}

#[pymethods]
impl PySubjectSummary {
    #[getter]
    fn exam_name(&self) -> &str {
        &self.inner.exam_name
    }

    #[getter]
    fn exam_date(&self) -> NaiveDate {
        self.inner.exam_date
    }

    #[getter]
    fn total_days(&self) -> u32 {
        self.inner.total_days
    }

    #[getter]
    fn phases(&self) -> Vec<PyPhaseSummary> {
        self.inner
            .phases
            .iter()
            .map(|p| PyPhaseSummary { inner: p.clone() })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "SubjectSummary(exam_name={:?}, exam_date={}, phases={})",
            self.inner.exam_name,
            self.inner.exam_date,
            self.inner.phases.len()
        )
    }
}

/// Countdown to the earliest exam (PyO3 wrapper).
#[pyclass(name = "Countdown")]
#[derive(Clone, Debug)]
pub struct PyCountdown {
    inner: Countdown,
}

#[pymethods]
impl PyCountdown {
    /// `upcoming`, `exam_day` or `past`.
    #[getter]
    fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    #[getter]
    fn exam_name(&self) -> &str {
        self.inner.exam_name()
    }

    #[getter]
    fn days_left(&self) -> i64 {
        self.inner.days_left()
    }

    fn __repr__(&self) -> String {
        format!(
            "Countdown(kind={}, exam_name={:?}, days_left={})",
            self.inner.kind(),
            self.inner.exam_name(),
            self.inner.days_left()
        )
    }
}

/// Session store of exams, overrides and completion flags (PyO3 wrapper).
#[pyclass(name = "ExamRegistry")]
#[derive(Default)]
pub struct PyExamRegistry {
    inner: ExamRegistry,
}

#[pymethods]
impl PyExamRegistry {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Register an exam.
    ///
    /// # Raises
    /// * ValueError on a duplicate name, blank name or invalid difficulty
    fn add(&mut self, name: &str, date: NaiveDate, difficulty: i64) -> PyResult<PyExam> {
        let exam = self.inner.add(name, date, difficulty).map_err(to_py_err)?;
        Ok(PyExam {
            inner: exam.clone(),
        })
    }

    fn remove_all(&mut self) {
        self.inner.remove_all();
    }

    fn list(&self) -> Vec<PyExam> {
        self.inner
            .list()
            .iter()
            .map(|e| PyExam { inner: e.clone() })
            .collect()
    }

    fn set_override(&mut self, task_id: String, date: NaiveDate) {
        self.inner.set_override(task_id, date);
    }

    fn clear_override(&mut self, task_id: &str) -> Option<NaiveDate> {
        self.inner.clear_override(task_id)
    }

    fn set_completed(&mut self, task_id: String, done: bool) {
        self.inner.set_completed(task_id, done);
    }

    fn is_completed(&self, task_id: &str) -> bool {
        self.inner.is_completed(task_id)
    }

    #[pyo3(signature = (config=None))]
    fn roadmap(&self, config: Option<PyRoadmapConfig>) -> Vec<PyTask> {
        let config = config.map(|c| c.inner).unwrap_or_default();
        self.inner
            .roadmap(&config)
            .into_iter()
            .map(PyTask::from)
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// Build the full task roadmap for a list of exams.
///
/// # Arguments
/// * `exams` - Exams in caller order (re-sorted by date internally)
/// * `overrides` - Dict mapping task ID to a pinned date
/// * `config` - Optional scheduling configuration
///
/// # Returns
/// * List of dated tasks for every exam and phase
#[pyfunction]
#[pyo3(name = "build_roadmap", signature = (exams, overrides, config=None))]
fn py_build_roadmap(
    exams: Vec<PyExam>,
    overrides: HashMap<String, NaiveDate>,
    config: Option<PyRoadmapConfig>,
) -> Vec<PyTask> {
    let exams: Vec<Exam> = exams.into_iter().map(|e| e.inner).collect();
    let overrides: OverrideMap = overrides.into_iter().collect();
    let config = config.map(|c| c.inner).unwrap_or_default();
    build_roadmap(&exams, &overrides, &config)
        .into_iter()
        .map(PyTask::from)
        .collect()
}

/// Render tasks as calendar-import CSV.
#[pyfunction]
fn export_calendar_csv(tasks: Vec<PyTask>) -> String {
    let tasks: Vec<Task> = tasks.into_iter().map(|t| t.inner).collect();
    calendar_csv(&tasks)
}

/// Summarize each exam's phases, in the given exam order.
#[pyfunction]
#[pyo3(name = "subject_summaries")]
fn py_subject_summaries(exams: Vec<PyExam>, tasks: Vec<PyTask>) -> Vec<PySubjectSummary> {
    let exams: Vec<Exam> = exams.into_iter().map(|e| e.inner).collect();
    let tasks: Vec<Task> = tasks.into_iter().map(|t| t.inner).collect();
    subject_summaries(&exams, &tasks)
        .into_iter()
        .map(|inner| PySubjectSummary { inner })
        .collect()
}

/// Group tasks by date as a list of `(date, [Task])`, ascending.
#[pyfunction]
#[pyo3(name = "daily_roadmap")]
fn py_daily_roadmap(tasks: Vec<PyTask>) -> Vec<(NaiveDate, Vec<PyTask>)> {
    let tasks: Vec<Task> = tasks.into_iter().map(|t| t.inner).collect();
    daily_roadmap(&tasks)
        .into_iter()
        .map(|(date, day)| (date, day.into_iter().cloned().map(PyTask::from).collect()))
        .collect()
}

/// Countdown to the earliest exam, or None without exams.
#[pyfunction]
#[pyo3(name = "countdown")]
fn py_countdown(exams: Vec<PyExam>, today: NaiveDate) -> Option<PyCountdown> {
    let exams: Vec<Exam> = exams.into_iter().map(|e| e.inner).collect();
    countdown(&exams, today).map(|inner| PyCountdown { inner })
}

/// The study_anchor.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<PyExam>()?;
    m.add_class::<PyTask>()?;
    m.add_class::<PyExamRegistry>()?;
    m.add_class::<PyPhaseSummary>()?;
    m.add_class::<PySubjectSummary>()?;
    m.add_class::<PyCountdown>()?;

    // Config types
    m.add_class::<PyRoadmapConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_build_roadmap, m)?)?;
    m.add_function(wrap_pyfunction!(export_calendar_csv, m)?)?;
    m.add_function(wrap_pyfunction!(py_subject_summaries, m)?)?;
    m.add_function(wrap_pyfunction!(py_daily_roadmap, m)?)?;
    m.add_function(wrap_pyfunction!(py_countdown, m)?)?;

    m.add("EXPORT_FILE_NAME", crate::export::EXPORT_FILE_NAME)?;

    Ok(())
}
