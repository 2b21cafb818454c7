//! Occupancy vault: which dates have been claimed, and by whom.

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

/// Tracks date occupancy during a scheduling run.
///
/// Two layers:
/// - Simulation dates are reserved globally: no automatically placed task
///   of any exam may land on one.
/// - Every other claim is recorded per exam, so two tasks of the same exam
///   never share a date while different exams may.
#[derive(Clone, Debug, Default)]
pub struct Vault {
    /// Reserved simulation date -> exam that reserved it first
    simulation: FxHashMap<NaiveDate, String>,
    /// Exam name -> dates already holding one of its tasks
    by_exam: FxHashMap<String, FxHashSet<NaiveDate>>,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a simulation date for an exam.
    ///
    /// Also records the date against the exam itself. Returns false if the
    /// date was already reserved (only possible through overrides).
    pub fn reserve_simulation(&mut self, exam_name: &str, date: NaiveDate) -> bool {
        self.claim(exam_name, date);
        if self.simulation.contains_key(&date) {
            return false;
        }
        self.simulation.insert(date, exam_name.to_string());
        true
    }

    /// Whether a date is reserved for simulation by any exam.
    #[inline]
    pub fn is_simulation(&self, date: NaiveDate) -> bool {
        self.simulation.contains_key(&date)
    }

    /// Exam that first reserved a simulation date.
    pub fn simulation_owner(&self, date: NaiveDate) -> Option<&str> {
        self.simulation.get(&date).map(|s| s.as_str())
    }

    /// Record a non-simulation task of an exam on a date.
    pub fn claim(&mut self, exam_name: &str, date: NaiveDate) {
        self.by_exam
            .entry(exam_name.to_string())
            .or_default()
            .insert(date);
    }

    /// Whether the exam already has a task on this date.
    #[inline]
    pub fn exam_holds(&self, exam_name: &str, date: NaiveDate) -> bool {
        self.by_exam
            .get(exam_name)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Free for a course (Practice/Study) task of this exam.
    #[inline]
    pub fn is_free_for_course(&self, exam_name: &str, date: NaiveDate) -> bool {
        !self.is_simulation(date) && !self.exam_holds(exam_name, date)
    }

    /// Number of globally reserved simulation dates.
    pub fn simulation_len(&self) -> usize {
        self.simulation.len()
    }
}

/// Walk backward from `cursor` to the first date accepted by `is_free`.
///
/// Returns the accepted date; `cursor` is left pointing at it. Stops at the
/// earliest representable date rather than looping.
pub fn walk_back<F>(cursor: &mut NaiveDate, mut is_free: F) -> NaiveDate
where
    F: FnMut(NaiveDate) -> bool,
{
    while !is_free(*cursor) {
        match cursor.pred_opt() {
            Some(prev) => *cursor = prev,
            None => break,
        }
    }
    *cursor
}
