//! Read-only views over a scheduled roadmap.
//!
//! The presentation layer renders these directly: a per-subject summary,
//! a per-date roadmap, and a countdown to the next exam.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Exam, Phase, Task};

/// Summary of one phase of one exam.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseSummary {
    pub phase: Phase,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub count: usize,
    /// Share of the exam's preparation window, in whole percent.
    pub percent_of_window: u32,
}

/// Per-subject summary card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectSummary {
    pub exam_name: String,
    pub exam_date: NaiveDate,
    pub total_days: u32,
    /// Phases that have at least one task, in display order.
    pub phases: Vec<PhaseSummary>,
}

/// Summarize each exam, in registry order.
pub fn subject_summaries(exams: &[Exam], tasks: &[Task]) -> Vec<SubjectSummary> {
    exams
        .iter()
        .map(|exam| {
            let total_days = exam.total_days();
            let phases = Phase::ALL
                .iter()
                .filter_map(|&phase| {
                    let mut dates = tasks
                        .iter()
                        .filter(|t| t.exam_name == exam.name() && t.phase == phase)
                        .map(|t| t.date);
                    let first = dates.next()?;
                    let (mut first_date, mut last_date, mut count) = (first, first, 1usize);
                    for date in dates {
                        first_date = first_date.min(date);
                        last_date = last_date.max(date);
                        count += 1;
                    }
                    Some(PhaseSummary {
                        phase,
                        first_date,
                        last_date,
                        count,
                        percent_of_window: (count as u32 * 100 + total_days / 2) / total_days,
                    })
                })
                .collect();

            SubjectSummary {
                exam_name: exam.name().to_string(),
                exam_date: exam.date(),
                total_days,
                phases,
            }
        })
        .collect()
}

/// Group tasks by date, ascending. Within a day, scheduler order is kept.
pub fn daily_roadmap(tasks: &[Task]) -> Vec<(NaiveDate, Vec<&Task>)> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        by_date.entry(task.date).or_default().push(task);
    }
    by_date.into_iter().collect()
}

/// Days remaining until the earliest exam.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Countdown {
    Upcoming { exam_name: String, days_left: i64 },
    ExamDay { exam_name: String },
    Past { exam_name: String },
}

impl Countdown {
    /// Short state name: `upcoming`, `exam_day` or `past`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Upcoming { .. } => "upcoming",
            Self::ExamDay { .. } => "exam_day",
            Self::Past { .. } => "past",
        }
    }

    pub fn exam_name(&self) -> &str {
        match self {
            Self::Upcoming { exam_name, .. }
            | Self::ExamDay { exam_name }
            | Self::Past { exam_name } => exam_name,
        }
    }

    /// Days left; zero on exam day and once the exam has passed.
    pub fn days_left(&self) -> i64 {
        match self {
            Self::Upcoming { days_left, .. } => *days_left,
            Self::ExamDay { .. } | Self::Past { .. } => 0,
        }
    }
}

/// Countdown to the earliest exam as seen from `today`.
///
/// Ties on date go to the exam registered first. `None` without exams.
pub fn countdown(exams: &[Exam], today: NaiveDate) -> Option<Countdown> {
    let earliest = exams.iter().min_by_key(|e| e.date())?;
    let exam_name = earliest.name().to_string();
    let days_left = (earliest.date() - today).num_days();
    Some(match days_left {
        n if n > 0 => Countdown::Upcoming {
            exam_name,
            days_left: n,
        },
        0 => Countdown::ExamDay { exam_name },
        _ => Countdown::Past { exam_name },
    })
}
