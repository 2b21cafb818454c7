//! Refresh insertion: fill long gaps in an exam's course dates.

use chrono::{Days, NaiveDate};

/// Compute Refresh dates for one exam's course dates.
///
/// `course_dates` must be sorted ascending. For each adjacent pair more than
/// `gap_threshold_days` apart, a candidate is placed at the midpoint
/// (`gap / 2` days after the earlier date) and nudged forward past reserved
/// simulation dates. A candidate that would reach the later date is dropped.
pub fn refresh_dates<F>(
    course_dates: &[NaiveDate],
    gap_threshold_days: i64,
    is_simulation: F,
) -> Vec<NaiveDate>
where
    F: Fn(NaiveDate) -> bool,
{
    let mut result = Vec::new();

    for pair in course_dates.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        let gap = (later - earlier).num_days();
        if gap <= gap_threshold_days {
            continue;
        }

        let Some(mut candidate) = earlier.checked_add_days(Days::new((gap / 2) as u64)) else {
            continue;
        };
        while candidate < later && is_simulation(candidate) {
            match candidate.succ_opt() {
                Some(next) => candidate = next,
                None => break,
            }
        }

        if candidate < later && !is_simulation(candidate) {
            result.push(candidate);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_no_refresh_for_short_gaps() {
        let dates = vec![d(2025, 6, 1), d(2025, 6, 8), d(2025, 6, 9)];
        assert!(refresh_dates(&dates, 7, |_| false).is_empty());
    }

    #[test]
    fn test_refresh_at_midpoint() {
        // 9-day gap -> 4 days after the earlier date
        let dates = vec![d(2025, 6, 1), d(2025, 6, 10)];
        assert_eq!(refresh_dates(&dates, 7, |_| false), vec![d(2025, 6, 5)]);
    }

    #[test]
    fn test_refresh_nudged_past_simulation() {
        let sims: FxHashSet<NaiveDate> = [d(2025, 6, 5), d(2025, 6, 6)].into_iter().collect();
        let dates = vec![d(2025, 6, 1), d(2025, 6, 10)];
        assert_eq!(
            refresh_dates(&dates, 7, |date| sims.contains(&date)),
            vec![d(2025, 6, 7)]
        );
    }

    #[test]
    fn test_refresh_dropped_when_nudge_reaches_later_date() {
        // gap of 8: midpoint 6/5, every date up to the later one is reserved
        let sims: FxHashSet<NaiveDate> = (5..9).map(|day| d(2025, 6, day)).collect();
        let dates = vec![d(2025, 6, 1), d(2025, 6, 9)];
        assert!(refresh_dates(&dates, 7, |date| sims.contains(&date)).is_empty());
    }

    #[test]
    fn test_one_refresh_per_gap() {
        let dates = vec![d(2025, 5, 1), d(2025, 5, 20), d(2025, 6, 10)];
        assert_eq!(
            refresh_dates(&dates, 7, |_| false),
            vec![d(2025, 5, 10), d(2025, 5, 30)]
        );
    }

    #[test]
    fn test_threshold_is_configurable() {
        let dates = vec![d(2025, 6, 1), d(2025, 6, 5)];
        assert!(refresh_dates(&dates, 7, |_| false).is_empty());
        assert_eq!(refresh_dates(&dates, 3, |_| false), vec![d(2025, 6, 3)]);
    }
}
