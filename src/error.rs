//! Errors reported by the league scheduler.

use thiserror::Error;

/// Largest supported team count.
pub const MAX_TEAMS: usize = 13;

/// Largest supported even team count.
pub const MAX_EVEN_TEAMS: usize = 12;

/// Errors that prevent a schedule from being produced.
///
/// Solver degradation is not an error; see
/// [`SheetAssignment`](crate::cp::SheetAssignment).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Fewer than two teams: there is nobody to play.
    #[error("a round robin needs at least 2 teams, got {0}")]
    TooFewTeams(usize),
    /// No generation path exists for this team count.
    #[error(
        "{0} teams is not supported (even counts up to {max_even}, odd counts up to {max})",
        max_even = MAX_EVEN_TEAMS,
        max = MAX_TEAMS
    )]
    UnsupportedTeamCount(usize),
}

/// Checks that `team_count` has a generation path.
pub fn check_team_count(team_count: usize) -> Result<(), ScheduleError> {
    if team_count < 2 {
        return Err(ScheduleError::TooFewTeams(team_count));
    }
    let even = team_count % 2 == 0;
    if team_count > MAX_TEAMS || (even && team_count > MAX_EVEN_TEAMS) {
        return Err(ScheduleError::UnsupportedTeamCount(team_count));
    }
    Ok(())
}
