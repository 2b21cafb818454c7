//! Phase day-count computation.
//!
//! A preparation window is split into Simulation (20%, at least two days),
//! Practice (30%) and Study (the remainder). Rounding is half away from
//! zero, computed on integer tenths so no float ties can arise.

use crate::models::{Difficulty, PhaseCounts};

/// Minimum number of exclusive simulation days before any exam.
pub const MIN_SIMULATION_DAYS: u32 = 2;

const SIMULATION_TENTHS: u32 = 2;
const PRACTICE_TENTHS: u32 = 3;

/// `round(total * tenths / 10)`, half away from zero.
fn round_share(total: u32, tenths: u32) -> u32 {
    (total * tenths + 5) / 10
}

/// Split a window of `total_days` into phase day counts.
///
/// The Study count absorbs the rounding remainder. If the simulation floor
/// pushes the fixed phases past the window, Study saturates at zero.
pub fn phase_counts(total_days: u32) -> PhaseCounts {
    let simulation = round_share(total_days, SIMULATION_TENTHS).max(MIN_SIMULATION_DAYS);
    let practice = round_share(total_days, PRACTICE_TENTHS);
    let study = total_days.saturating_sub(simulation + practice);
    PhaseCounts {
        simulation,
        practice,
        study,
    }
}

/// Phase day counts for a difficulty tier.
pub fn counts_for(difficulty: Difficulty) -> PhaseCounts {
    phase_counts(difficulty.total_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tier_counts() {
        assert_eq!(
            counts_for(Difficulty::Light),
            PhaseCounts {
                simulation: 2,
                practice: 2,
                study: 3
            }
        );
        assert_eq!(
            counts_for(Difficulty::Moderate),
            PhaseCounts {
                simulation: 2,
                practice: 3,
                study: 5
            }
        );
        assert_eq!(
            counts_for(Difficulty::Heavy),
            PhaseCounts {
                simulation: 3,
                practice: 4,
                study: 7
            }
        );
    }

    #[test]
    fn test_counts_sum_to_window() {
        for difficulty in [Difficulty::Light, Difficulty::Moderate, Difficulty::Heavy] {
            let counts = counts_for(difficulty);
            assert_eq!(counts.total(), difficulty.total_days());
            assert!(counts.simulation >= MIN_SIMULATION_DAYS);
        }
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 5 * 0.3 = 1.5 -> 2
        assert_eq!(round_share(5, PRACTICE_TENTHS), 2);
        // 15 * 0.3 = 4.5 -> 5
        assert_eq!(round_share(15, PRACTICE_TENTHS), 5);
    }

    #[test]
    fn test_tiny_window_saturates_study() {
        let counts = phase_counts(2);
        assert_eq!(counts.simulation, 2);
        assert_eq!(counts.practice, 1);
        assert_eq!(counts.study, 0);
    }
}
