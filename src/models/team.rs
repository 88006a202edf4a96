//! Team model.
//!
//! A team is either a real participant numbered `1..=N` or the `Bye`
//! sentinel, which stands for "no opponent" (odd team counts) or an
//! unresolved slot left by the sheet solver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A participant slot in a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    /// No team plays in this slot.
    Bye,
    /// A real team, numbered from 1.
    Real(u8),
}

impl Team {
    /// Creates a real team.
    ///
    /// # Panics
    /// Panics if `number` is zero; team numbers start at 1.
    pub fn real(number: u8) -> Self {
        assert!(number > 0, "team numbers start at 1");
        Team::Real(number)
    }

    /// Whether this slot is the bye sentinel.
    #[inline]
    pub fn is_bye(&self) -> bool {
        matches!(self, Team::Bye)
    }

    /// Team number, or `None` for a bye.
    #[inline]
    pub fn number(&self) -> Option<u8> {
        match self {
            Team::Real(n) => Some(*n),
            Team::Bye => None,
        }
    }

    /// Index into per-team tables: 0 for the bye, `n` for team `n`.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        match self {
            Team::Real(n) => *n as usize,
            Team::Bye => 0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Real(n) => write!(f, "{n}"),
            Team::Bye => f.write_str("BYE"),
        }
    }
}
