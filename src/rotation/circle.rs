//! Circle-method pairing rotation.
//!
//! # Algorithm
//!
//! 1. Seat teams `1..=N` around a circle. For odd `N`, a bye is seated
//!    first so the seat count is even.
//! 2. Each round, split the seats into a top and a bottom half, reverse
//!    the bottom half, and pair `top[i]` with `bottom[i]`.
//! 3. Hold seat 0 fixed and rotate the others one step: the last seat
//!    moves to position 1.
//!
//! After `seats - 1` rounds every pair of teams has met exactly once.
//! With an odd count the bye holds the fixed seat, so the bye matchup is
//! always the first matchup of its round.
//!
//! # Reference
//! Lucas (1883), "Récréations mathématiques", Vol. II (circle method)

use crate::error::{check_team_count, ScheduleError};
use crate::models::{Matchup, Schedule, Team, Week};

/// Round-robin pairing generator for a fixed team count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleRotation {
    team_count: usize,
}

impl CircleRotation {
    /// Creates a generator for `team_count` real teams.
    ///
    /// # Panics
    /// Panics unless `2 <= team_count <= 255`.
    pub fn new(team_count: usize) -> Self {
        assert!(
            (2..=u8::MAX as usize).contains(&team_count),
            "circle rotation needs 2..=255 teams, got {team_count}"
        );
        Self { team_count }
    }

    /// Creates a generator for a supported league size.
    ///
    /// # Errors
    /// [`ScheduleError::TooFewTeams`] or
    /// [`ScheduleError::UnsupportedTeamCount`] outside the league limits.
    pub fn try_new(team_count: usize) -> Result<Self, ScheduleError> {
        check_team_count(team_count)?;
        Ok(Self { team_count })
    }

    /// Number of real teams.
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Whether a bye seat is added.
    #[inline]
    pub fn has_bye(&self) -> bool {
        self.team_count % 2 == 1
    }

    /// Seats around the circle (team count rounded up to even).
    pub fn seat_count(&self) -> usize {
        self.team_count + self.team_count % 2
    }

    /// Rounds produced: `N - 1` for even `N`, `N` for odd `N`.
    pub fn round_count(&self) -> usize {
        self.seat_count() - 1
    }

    /// Matchups per round, including the bye matchup.
    pub fn matchups_per_round(&self) -> usize {
        self.seat_count() / 2
    }

    /// Initial seating: `[BYE,] 1, 2, ..., N`.
    fn initial_seats(&self) -> Vec<Team> {
        let mut seats = Vec::with_capacity(self.seat_count());
        if self.has_bye() {
            seats.push(Team::Bye);
        }
        seats.extend((1..=self.team_count as u8).map(Team::Real));
        seats
    }

    /// Generates the rotation with the top-half team in the red role.
    ///
    /// Roles are not balanced here; see
    /// [`balance_roles`](super::balance_roles).
    pub fn generate(&self) -> Schedule {
        let half = self.matchups_per_round();
        let mut seats = self.initial_seats();
        let mut schedule = Schedule::new();

        for _ in 0..self.round_count() {
            let (top, bottom) = seats.split_at(half);
            let matchups = top
                .iter()
                .zip(bottom.iter().rev())
                .map(|(&red, &yellow)| Matchup::new(red, yellow))
                .collect();
            schedule.add_week(Week::new(matchups));

            seats[1..].rotate_right(1);
        }

        schedule
    }
}
