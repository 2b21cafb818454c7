//! Calendar export.
//!
//! Emits the three-column CSV understood by calendar import tools:
//! `Subject,Start Date,All Day Event`. Header names and the all-day flag
//! are parsed by the importing tool and must not change.

use crate::models::Task;

/// Suggested file name for the exported calendar.
pub const EXPORT_FILE_NAME: &str = "study_schedule.csv";

/// Header row of the export.
pub const EXPORT_HEADER: &str = "Subject,Start Date,All Day Event";

const ALL_DAY_FLAG: &str = "True";

/// Render tasks as calendar CSV, one row per task ordered by date.
///
/// Dates are ISO (`YYYY-MM-DD`); tasks on the same day keep scheduler order.
pub fn calendar_csv(tasks: &[Task]) -> String {
    let mut rows: Vec<&Task> = tasks.iter().collect();
    rows.sort_by_key(|t| t.date);

    let mut out = String::with_capacity(EXPORT_HEADER.len() + 1 + rows.len() * 40);
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for task in rows {
        out.push_str(&csv_escape(&task.subject_label()));
        out.push(',');
        out.push_str(&task.date.format("%Y-%m-%d").to_string());
        out.push(',');
        out.push_str(ALL_DAY_FLAG);
        out.push('\n');
    }
    out
}

/// Minimal CSV field escaping (wraps in quotes if needed).
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{task_id, Phase};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn task(exam: &str, phase: Phase, index: usize, date: NaiveDate) -> Task {
        Task {
            id: task_id(exam, phase, index),
            exam_name: exam.to_string(),
            date,
            phase,
            is_priority: false,
            is_moved: false,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let tasks = vec![
            task("Math", Phase::Simulation, 0, d(2025, 6, 9)),
            task("Math", Phase::Practice, 0, d(2025, 6, 7)),
        ];

        assert_eq!(
            calendar_csv(&tasks),
            "Subject,Start Date,All Day Event\n\
             Math (Practice),2025-06-07,True\n\
             Math (Simulation),2025-06-09,True\n"
        );
    }

    #[test]
    fn test_empty_export_has_header_only() {
        assert_eq!(calendar_csv(&[]), "Subject,Start Date,All Day Event\n");
    }

    #[test]
    fn test_subject_with_comma_is_quoted() {
        let tasks = vec![task("Math, Part \"B\"", Phase::Study, 0, d(2025, 6, 1))];
        assert_eq!(
            calendar_csv(&tasks),
            "Subject,Start Date,All Day Event\n\
             \"Math, Part \"\"B\"\" (Study)\",2025-06-01,True\n"
        );
    }
}
