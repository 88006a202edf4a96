//! League schedule orchestration.
//!
//! # Algorithm
//!
//! 1. Twelve teams: take one of the two curated tables at random.
//! 2. Otherwise: circle rotation, then role balancing.
//!    - Odd counts: move each week's bye matchup to the last slot.
//!    - Even counts above four: optionally shuffle each week, then run the
//!      sheet assignment solver.
//! 3. Optionally shuffle week order. This happens after sheet assignment
//!    and role balancing, both of which rely on the generated order.
//! 4. Compute usage statistics and validate the result.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ScheduleConfig;
use crate::cp::SheetAssignmentSolver;
use crate::error::ScheduleError;
use crate::models::Schedule;
use crate::rotation::{balance_roles, CircleRotation, FixedTable, FIXED_TEAM_COUNT};
use crate::validation::{validate_schedule, ValidationError};

use super::UsageStats;

/// Largest even team count whose schedule is used in generated sheet order.
const UNSOLVED_EVEN_LIMIT: usize = 4;

/// Where the pairings of a schedule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleSource {
    /// Circle rotation in generated sheet order.
    Rotation,
    /// Circle rotation placed on sheets by the solver.
    SolvedRotation,
    /// A curated twelve-team table.
    Fixed(FixedTable),
}

/// A finished league schedule and its statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSchedule {
    /// Number of real teams.
    pub team_count: usize,
    /// Weeks in play order; slot `i` is sheet `i + 1`.
    pub schedule: Schedule,
    /// Usage statistics of `schedule`.
    pub stats: UsageStats,
    /// Path that produced the pairings.
    pub source: ScheduleSource,
    /// Placeholder cells left by the sheet solver.
    pub degraded_cells: usize,
    /// Invariant violations found in the final schedule.
    #[serde(skip)]
    pub violations: Vec<ValidationError>,
}

impl LeagueSchedule {
    /// Whether the team count is odd (last slot of each week is the bye).
    pub fn is_odd(&self) -> bool {
        self.team_count % 2 == 1
    }

    /// Number of sheets, counting the bye column for odd counts.
    pub fn sheet_count(&self) -> usize {
        self.schedule.sheet_count()
    }

    /// Whether the schedule passed validation.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Builds league schedules from a [`ScheduleConfig`].
///
/// # Example
///
/// ```
/// use u_roundrobin::config::ScheduleConfig;
/// use u_roundrobin::scheduler::LeagueScheduler;
///
/// let scheduler = LeagueScheduler::new(ScheduleConfig::new(6).with_seed(1));
/// let league = scheduler.run().unwrap();
/// assert_eq!(league.schedule.week_count(), 5);
/// assert!(league.stats.within_sheet_cap(2));
/// ```
#[derive(Debug, Clone)]
pub struct LeagueScheduler {
    config: ScheduleConfig,
}

impl LeagueScheduler {
    /// Creates a scheduler.
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Runs with the configured seed, or the process-wide RNG if unset.
    pub fn run(&self) -> Result<LeagueSchedule, ScheduleError> {
        match self.config.seed {
            Some(seed) => self.generate(&mut StdRng::seed_from_u64(seed)),
            None => self.generate(&mut rand::rng()),
        }
    }

    /// Builds a schedule drawing all randomness from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<LeagueSchedule, ScheduleError> {
        self.config.validate()?;
        let n = self.config.team_count;
        let odd = self.config.is_odd();
        let mut degraded_cells = 0;

        let (mut schedule, source) = if n == FIXED_TEAM_COUNT {
            let table = FixedTable::choose(rng);
            info!(teams = n, table = ?table, "using curated table");
            (table.schedule(), ScheduleSource::Fixed(table))
        } else {
            let mut schedule = CircleRotation::try_new(n)?.generate();
            balance_roles(&mut schedule, n);

            if odd {
                schedule.move_byes_last();
                (schedule, ScheduleSource::Rotation)
            } else if n > UNSOLVED_EVEN_LIMIT {
                if self.config.shuffle_sheets {
                    schedule.shuffle_sheets(rng);
                }
                let assignment = SheetAssignmentSolver::new()
                    .with_cap(self.config.sheet_cap)
                    .solve(&schedule);
                info!(
                    teams = n,
                    solved = assignment.solved,
                    nodes = assignment.nodes_explored,
                    "sheets assigned"
                );
                degraded_cells = assignment.unresolved_cells;
                (assignment.schedule, ScheduleSource::SolvedRotation)
            } else {
                (schedule, ScheduleSource::Rotation)
            }
        };

        if self.config.shuffle_weeks {
            schedule.shuffle_weeks(rng);
        }

        let stats = UsageStats::calculate(&schedule, n);
        let cap = (odd || n > UNSOLVED_EVEN_LIMIT).then_some(self.config.sheet_cap);
        let violations = validate_schedule(&schedule, n, cap).err().unwrap_or_default();
        for v in &violations {
            warn!(kind = ?v.kind, "{}", v.message);
        }
        debug!(
            teams = n,
            weeks = schedule.week_count(),
            sheets = schedule.sheet_count(),
            max_sheet = stats.max_sheet_count(),
            "schedule built"
        );

        Ok(LeagueSchedule {
            team_count: n,
            schedule,
            stats,
            source,
            degraded_cells,
            violations,
        })
    }
}
