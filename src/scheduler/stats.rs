//! Per-team usage statistics.
//!
//! Counts how often each team holds the red and yellow role and how often
//! it plays on each sheet. The solver calls this once per tentative
//! placement, so a pass is linear in the number of matchups.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | red | Games in the first role |
//! | yellow | Games in the second role |
//! | sheets[i] | Games on sheet `i + 1` |
//!
//! Matchups involving a bye contribute nothing.

use serde::{Deserialize, Serialize};

use crate::models::{Matchup, Schedule, Team};

/// Usage counts for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamUsage {
    /// The team these counts belong to.
    pub team: Team,
    /// Games played with red stones.
    pub red: u32,
    /// Games played with yellow stones.
    pub yellow: u32,
    /// Games per sheet, indexed by 0-based sheet position.
    pub sheets: Vec<u32>,
}

impl TeamUsage {
    fn new(team: Team, sheet_count: usize) -> Self {
        Self {
            team,
            red: 0,
            yellow: 0,
            sheets: vec![0; sheet_count],
        }
    }

    /// Total games played.
    pub fn games(&self) -> u32 {
        self.red + self.yellow
    }

    /// `red - yellow`.
    pub fn role_difference(&self) -> i64 {
        i64::from(self.red) - i64::from(self.yellow)
    }

    /// Highest single-sheet count.
    pub fn max_sheet_count(&self) -> u32 {
        self.sheets.iter().copied().max().unwrap_or(0)
    }
}

/// Usage statistics for every team of a schedule.
///
/// Entry 0 is the bye sentinel and always stays at zero; entry `n` is
/// team `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    entries: Vec<TeamUsage>,
    sheet_count: usize,
}

impl UsageStats {
    /// Computes statistics for a schedule.
    ///
    /// # Arguments
    /// * `schedule` - Schedule whose slot positions are read as sheets.
    /// * `team_count` - Number of real teams. Teams above this number are
    ///   widened into the table rather than dropped.
    pub fn calculate(schedule: &Schedule, team_count: usize) -> Self {
        Self::tally(
            team_count.max(schedule.max_team_number()),
            schedule.sheet_count(),
            schedule.positioned().map(|(_, sheet, m)| (sheet, m)),
        )
    }

    /// Computes statistics from `(sheet, matchup)` cells.
    ///
    /// Cells whose sheet is out of range or whose team number exceeds
    /// `team_count` are ignored.
    pub fn tally<'a, I>(team_count: usize, sheet_count: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a Matchup)>,
    {
        let mut entries: Vec<TeamUsage> = std::iter::once(Team::Bye)
            .chain((1..=team_count).map(|n| Team::Real(n as u8)))
            .map(|t| TeamUsage::new(t, sheet_count))
            .collect();

        for (sheet, m) in cells {
            if m.is_bye() || sheet >= sheet_count {
                continue;
            }
            let (red, yellow) = (m.red.index(), m.yellow.index());
            if red > team_count || yellow > team_count {
                continue;
            }

            entries[red].red += 1;
            entries[yellow].yellow += 1;
            entries[red].sheets[sheet] += 1;
            entries[yellow].sheets[sheet] += 1;
        }

        Self {
            entries,
            sheet_count,
        }
    }

    /// Number of sheet columns.
    pub fn sheet_count(&self) -> usize {
        self.sheet_count
    }

    /// Number of real teams covered.
    pub fn team_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Counts for one team (the bye entry included).
    pub fn usage(&self, team: Team) -> Option<&TeamUsage> {
        self.entries.get(team.index())
    }

    /// Counts for real teams, in team-number order.
    pub fn teams(&self) -> &[TeamUsage] {
        &self.entries[1..]
    }

    /// Highest per-sheet count of any real team.
    pub fn max_sheet_count(&self) -> u32 {
        self.teams()
            .iter()
            .map(TeamUsage::max_sheet_count)
            .max()
            .unwrap_or(0)
    }

    /// Whether no real team exceeds `cap` games on any sheet.
    pub fn within_sheet_cap(&self, cap: u32) -> bool {
        self.max_sheet_count() <= cap
    }

    /// Largest `|red - yellow|` over real teams.
    pub fn max_role_imbalance(&self) -> u64 {
        self.teams()
            .iter()
            .map(|u| u.role_difference().unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Week;

    fn sample_schedule() -> Schedule {
        Schedule::from_weeks(vec![
            Week::from(vec![(1, 4), (2, 3)]),
            Week::from(vec![(3, 1), (4, 2)]),
            Week::from(vec![(1, 2), (3, 4)]),
        ])
    }

    #[test]
    fn test_stats_basic() {
        let stats = UsageStats::calculate(&sample_schedule(), 4);
        assert_eq!(stats.team_count(), 4);
        assert_eq!(stats.sheet_count(), 2);

        let t1 = stats.usage(Team::real(1)).unwrap();
        assert_eq!((t1.red, t1.yellow), (2, 1));
        assert_eq!(t1.sheets, vec![3, 0]);
        assert_eq!(t1.games(), 3);

        let t3 = stats.usage(Team::real(3)).unwrap();
        assert_eq!((t3.red, t3.yellow), (2, 1));
        assert_eq!(t3.sheets, vec![1, 2]);

        assert_eq!(stats.max_sheet_count(), 3);
        assert!(!stats.within_sheet_cap(2));
        assert!(stats.within_sheet_cap(3));
        assert_eq!(stats.max_role_imbalance(), 1);
    }

    #[test]
    fn test_bye_contributes_nothing() {
        let s = Schedule::from_weeks(vec![
            Week::new(vec![
                Matchup::between(1, 2),
                Matchup::new(Team::Bye, Team::real(3)),
            ]),
            Week::new(vec![Matchup::placeholder(), Matchup::between(3, 1)]),
        ]);
        let stats = UsageStats::calculate(&s, 3);

        let bye = stats.usage(Team::Bye).unwrap();
        assert_eq!(bye.games(), 0);
        assert!(bye.sheets.iter().all(|&c| c == 0));

        let t3 = stats.usage(Team::real(3)).unwrap();
        assert_eq!(t3.games(), 1);
        assert_eq!(t3.sheets, vec![0, 1]);
    }

    #[test]
    fn test_idempotent() {
        let s = sample_schedule();
        assert_eq!(UsageStats::calculate(&s, 4), UsageStats::calculate(&s, 4));
    }

    #[test]
    fn test_tally_partial_cells() {
        let a = Matchup::between(1, 2);
        let b = Matchup::between(1, 3);
        let stats = UsageStats::tally(3, 2, [(0, &a), (0, &b)]);
        assert_eq!(stats.usage(Team::real(1)).unwrap().sheets, vec![2, 0]);
        assert_eq!(stats.usage(Team::real(2)).unwrap().sheets, vec![1, 0]);
        assert_eq!(stats.usage(Team::real(4)), None);
    }

    #[test]
    fn test_team_count_widened() {
        let stats = UsageStats::calculate(&sample_schedule(), 2);
        assert_eq!(stats.team_count(), 4);
    }

    #[test]
    fn test_empty_schedule() {
        let stats = UsageStats::calculate(&Schedule::new(), 0);
        assert_eq!(stats.team_count(), 0);
        assert_eq!(stats.max_sheet_count(), 0);
        assert!(stats.teams().is_empty());
    }
}
