//! Core roadmap scheduler: backward-fill placement of every exam's tasks.

use chrono::NaiveDate;

use crate::budget::counts_for;
use crate::config::RoadmapConfig;
use crate::models::{task_id, Exam, Phase, Task};
use crate::registry::OverrideMap;
use crate::{log_changes, log_checks, log_debug};

use super::refresh::refresh_dates;
use super::vault::{walk_back, Vault};

/// Deterministic scheduler turning exams and overrides into dated tasks.
///
/// Runs in three steps:
/// 1. Simulation days for every exam, globally exclusive.
/// 2. Practice then Study days per exam, avoiding simulation dates and the
///    exam's own earlier tasks.
/// 3. Refresh tasks in long gaps between an exam's course dates.
///
/// Exams are processed by ascending test date (stable, so equal dates keep
/// insertion order). Step 1 completes for all exams before step 2 starts.
pub struct RoadmapScheduler<'a> {
    exams: Vec<&'a Exam>,
    overrides: &'a OverrideMap,
    config: RoadmapConfig,
}

impl<'a> RoadmapScheduler<'a> {
    /// Create a scheduler over a set of exams and manual overrides.
    pub fn new(exams: &'a [Exam], overrides: &'a OverrideMap, config: RoadmapConfig) -> Self {
        let mut sorted: Vec<&Exam> = exams.iter().collect();
        sorted.sort_by_key(|e| e.date());
        Self {
            exams: sorted,
            overrides,
            config,
        }
    }

    /// Run the scheduling algorithm.
    pub fn schedule(&self) -> Vec<Task> {
        let mut vault = Vault::new();
        let mut tasks: Vec<Task> = Vec::new();

        for exam in &self.exams {
            self.reserve_simulations(exam, &mut vault, &mut tasks);
        }
        log_debug!(
            self.config.verbosity,
            "Reserved {} simulation dates",
            vault.simulation_len()
        );

        for exam in &self.exams {
            let mut course_dates = self.place_course(exam, &mut vault, &mut tasks);
            course_dates.sort();
            self.insert_refreshes(exam, &course_dates, &vault, &mut tasks);
        }

        tasks
    }

    fn override_for(&self, id: &str) -> Option<NaiveDate> {
        self.overrides.get(id).copied()
    }

    fn make_task(exam: &Exam, id: String, date: NaiveDate, phase: Phase, is_moved: bool) -> Task {
        Task {
            id,
            exam_name: exam.name().to_string(),
            date,
            phase,
            is_priority: exam.is_priority(),
            is_moved,
        }
    }

    /// Step A: reserve exclusive simulation days walking back from the test.
    ///
    /// Overridden slots take their pinned date and do not move the cursor.
    fn reserve_simulations(&self, exam: &Exam, vault: &mut Vault, tasks: &mut Vec<Task>) {
        let verbosity = self.config.verbosity;
        let counts = counts_for(exam.difficulty());
        log_debug!(
            verbosity,
            "{}: window {} days -> sim={} practice={} study={}",
            exam.name(),
            exam.total_days(),
            counts.simulation,
            counts.practice,
            counts.study
        );

        let Some(mut cursor) = exam.date().pred_opt() else {
            return;
        };

        for i in 0..counts.simulation as usize {
            let id = task_id(exam.name(), Phase::Simulation, i);

            if let Some(date) = self.override_for(&id) {
                if !vault.reserve_simulation(exam.name(), date) {
                    log_checks!(
                        verbosity,
                        "  {} pinned onto reserved simulation date {}",
                        id,
                        date
                    );
                }
                log_changes!(verbosity, "  {} -> {} (override)", id, date);
                tasks.push(Self::make_task(exam, id, date, Phase::Simulation, true));
                continue;
            }

            let date = walk_back(&mut cursor, |candidate| {
                let taken = vault.is_simulation(candidate);
                if taken {
                    log_checks!(verbosity, "  {}: {} already reserved", id, candidate);
                }
                !taken
            });
            vault.reserve_simulation(exam.name(), date);
            log_changes!(verbosity, "  {} -> {}", id, date);
            tasks.push(Self::make_task(exam, id, date, Phase::Simulation, false));
        }
    }

    /// Step B: place Practice then Study days; returns the dates used.
    ///
    /// Cross-exam sharing is allowed, but never on a simulation date and
    /// never twice for the same exam. An overridden slot steps the cursor
    /// back one day so the remaining slots keep their dates.
    fn place_course(
        &self,
        exam: &Exam,
        vault: &mut Vault,
        tasks: &mut Vec<Task>,
    ) -> Vec<NaiveDate> {
        let verbosity = self.config.verbosity;
        let counts = counts_for(exam.difficulty());
        let mut course_dates: Vec<NaiveDate> =
            Vec::with_capacity((counts.practice + counts.study) as usize);

        let Some(mut cursor) = exam.date().pred_opt() else {
            return course_dates;
        };

        let phases = [
            (Phase::Practice, counts.practice),
            (Phase::Study, counts.study),
        ];
        for (phase, count) in phases {
            for i in 0..count as usize {
                let id = task_id(exam.name(), phase, i);

                let (date, is_moved) = match self.override_for(&id) {
                    Some(date) => {
                        log_changes!(verbosity, "  {} -> {} (override)", id, date);
                        (date, true)
                    }
                    None => {
                        let date = walk_back(&mut cursor, |candidate| {
                            let free = vault.is_free_for_course(exam.name(), candidate);
                            if !free {
                                log_checks!(verbosity, "  {}: {} unavailable", id, candidate);
                            }
                            free
                        });
                        log_changes!(verbosity, "  {} -> {}", id, date);
                        (date, false)
                    }
                };

                vault.claim(exam.name(), date);
                course_dates.push(date);
                tasks.push(Self::make_task(exam, id, date, phase, is_moved));
                if let Some(prev) = cursor.pred_opt() {
                    cursor = prev;
                }
            }
        }

        course_dates
    }

    /// Step C: add Refresh tasks in gaps longer than the configured threshold.
    fn insert_refreshes(
        &self,
        exam: &Exam,
        course_dates: &[NaiveDate],
        vault: &Vault,
        tasks: &mut Vec<Task>,
    ) {
        let verbosity = self.config.verbosity;
        let dates = refresh_dates(course_dates, self.config.refresh_gap_days, |date| {
            vault.is_simulation(date)
        });

        for (i, date) in dates.into_iter().enumerate() {
            let id = task_id(exam.name(), Phase::Refresh, i);
            log_changes!(verbosity, "  {} -> {} (gap fill)", id, date);
            tasks.push(Self::make_task(exam, id, date, Phase::Refresh, false));
        }
    }
}

/// Schedule a set of exams with the given overrides.
pub fn build_roadmap(exams: &[Exam], overrides: &OverrideMap, config: &RoadmapConfig) -> Vec<Task> {
    RoadmapScheduler::new(exams, overrides, config.clone()).schedule()
}
