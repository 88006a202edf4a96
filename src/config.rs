//! League scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::{check_team_count, ScheduleError};

/// Default per-team, per-sheet appearance cap.
pub const DEFAULT_SHEET_CAP: u32 = 2;

/// Settings for one scheduling run.
///
/// # Example
///
/// ```
/// use u_roundrobin::config::ScheduleConfig;
///
/// let config = ScheduleConfig::new(8).with_seed(7).with_shuffle_weeks(false);
/// assert_eq!(config.team_count, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Number of real teams.
    pub team_count: usize,
    /// Shuffle week order after sheet assignment. Without it every team
    /// plays long runs of the same colour.
    pub shuffle_weeks: bool,
    /// Shuffle matchups inside each week before sheet assignment.
    pub shuffle_sheets: bool,
    /// Maximum appearances of one team on one sheet.
    pub sheet_cap: u32,
    /// Fixed RNG seed. `None` uses the process-wide generator.
    pub seed: Option<u64>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            team_count: 10,
            shuffle_weeks: true,
            shuffle_sheets: true,
            sheet_cap: DEFAULT_SHEET_CAP,
            seed: None,
        }
    }
}

impl ScheduleConfig {
    /// Creates a config for `team_count` teams with default settings.
    pub fn new(team_count: usize) -> Self {
        Self {
            team_count,
            ..Default::default()
        }
    }

    /// Sets week shuffling.
    pub fn with_shuffle_weeks(mut self, shuffle: bool) -> Self {
        self.shuffle_weeks = shuffle;
        self
    }

    /// Sets per-week sheet pre-shuffling.
    pub fn with_shuffle_sheets(mut self, shuffle: bool) -> Self {
        self.shuffle_sheets = shuffle;
        self
    }

    /// Sets the per-sheet cap.
    pub fn with_sheet_cap(mut self, cap: u32) -> Self {
        self.sheet_cap = cap;
        self
    }

    /// Sets a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether the team count is odd (one team sits out each week).
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.team_count % 2 == 1
    }

    /// Rejects team counts with no generation path.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        check_team_count(self.team_count)
    }
}
