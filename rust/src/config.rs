//! Configuration types for the roadmap scheduler.

/// Default threshold (in days) a gap between study dates must exceed
/// before a Refresh task is inserted into it.
pub const DEFAULT_REFRESH_GAP_DAYS: i64 = 7;

/// Configuration for a scheduling run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
    /// Gaps strictly longer than this many days receive a Refresh task.
    pub refresh_gap_days: i64,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            refresh_gap_days: DEFAULT_REFRESH_GAP_DAYS,
        }
    }
}

impl RoadmapConfig {
    /// Build a config, falling back to defaults for unset fields.
    pub fn new(verbosity: Option<u8>, refresh_gap_days: Option<i64>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            refresh_gap_days: refresh_gap_days.unwrap_or(defaults.refresh_gap_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoadmapConfig::default();
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.refresh_gap_days, 7);
    }

    #[test]
    fn test_partial_override() {
        let config = RoadmapConfig::new(Some(2), None);
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.refresh_gap_days, DEFAULT_REFRESH_GAP_DAYS);
    }
}
