//! Matchup model.
//!
//! A matchup is an ordered pair: the first team throws red stones,
//! the second throws yellow. If either side is a bye the matchup is a
//! non-event and contributes nothing to usage statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Team;

/// One game between two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matchup {
    /// Team holding the red role.
    pub red: Team,
    /// Team holding the yellow role.
    pub yellow: Team,
}

impl Matchup {
    /// Creates a matchup with `red` in the first role.
    pub fn new(red: Team, yellow: Team) -> Self {
        Self { red, yellow }
    }

    /// Shorthand for a game between two real teams.
    pub fn between(red: u8, yellow: u8) -> Self {
        Self::new(Team::real(red), Team::real(yellow))
    }

    /// The `(BYE, BYE)` placeholder for a slot nobody plays in.
    pub fn placeholder() -> Self {
        Self::new(Team::Bye, Team::Bye)
    }

    /// Whether either side is a bye.
    #[inline]
    pub fn is_bye(&self) -> bool {
        self.red.is_bye() || self.yellow.is_bye()
    }

    /// Whether this is the `(BYE, BYE)` placeholder.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.red.is_bye() && self.yellow.is_bye()
    }

    /// Same participants with roles exchanged.
    pub fn swapped(&self) -> Self {
        Self::new(self.yellow, self.red)
    }

    /// Whether `team` takes part in this matchup.
    pub fn involves(&self, team: Team) -> bool {
        self.red == team || self.yellow == team
    }

    /// The real team sitting out, for a matchup against a bye.
    pub fn sitting_out(&self) -> Option<Team> {
        match (self.red, self.yellow) {
            (Team::Bye, t @ Team::Real(_)) | (t @ Team::Real(_), Team::Bye) => Some(t),
            _ => None,
        }
    }

    /// Unordered key (lower number first) for pairing comparisons.
    pub fn pairing(&self) -> (Team, Team) {
        if self.red <= self.yellow {
            (self.red, self.yellow)
        } else {
            (self.yellow, self.red)
        }
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.red, self.yellow)
    }
}

impl From<(u8, u8)> for Matchup {
    fn from((red, yellow): (u8, u8)) -> Self {
        Self::between(red, yellow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapped() {
        let m = Matchup::between(1, 6);
        let s = m.swapped();
        assert_eq!(s.red, Team::real(6));
        assert_eq!(s.yellow, Team::real(1));
        assert_eq!(m.pairing(), s.pairing());
    }

    #[test]
    fn test_bye_detection() {
        let m = Matchup::new(Team::Bye, Team::real(4));
        assert!(m.is_bye());
        assert!(!m.is_placeholder());
        assert_eq!(m.sitting_out(), Some(Team::real(4)));

        let p = Matchup::placeholder();
        assert!(p.is_bye());
        assert!(p.is_placeholder());
        assert_eq!(p.sitting_out(), None);

        assert!(!Matchup::between(2, 3).is_bye());
        assert_eq!(Matchup::between(2, 3).sitting_out(), None);
    }

    #[test]
    fn test_involves() {
        let m = Matchup::between(5, 8);
        assert!(m.involves(Team::real(5)));
        assert!(m.involves(Team::real(8)));
        assert!(!m.involves(Team::real(1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Matchup::between(12, 10).to_string(), "(12, 10)");
        assert_eq!(Matchup::placeholder().to_string(), "(BYE, BYE)");
    }
}
