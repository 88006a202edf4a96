//! Week and schedule models.
//!
//! A schedule is an ordered list of weeks; a week is an ordered list of
//! matchups. Before sheet assignment the order inside a week carries no
//! meaning. After assignment, position `i` is sheet `i + 1`, and for odd
//! team counts the last position holds the bye matchup.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Matchup, Team};

/// One round of play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Matchups in slot order.
    pub matchups: Vec<Matchup>,
}

/// A complete multi-week schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Weeks in play order.
    pub weeks: Vec<Week>,
}

impl Week {
    /// Creates a week from matchups in slot order.
    pub fn new(matchups: Vec<Matchup>) -> Self {
        Self { matchups }
    }

    /// Number of slots in this week.
    #[inline]
    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    /// Whether the week has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Matchup on the given 0-based sheet.
    pub fn sheet(&self, index: usize) -> Option<&Matchup> {
        self.matchups.get(index)
    }

    /// The real team sitting out this week, if any.
    pub fn sitting_out(&self) -> Option<Team> {
        self.matchups.iter().find_map(Matchup::sitting_out)
    }

    /// Number of slots `team` is booked in, a bye matchup included.
    pub fn bookings(&self, team: Team) -> usize {
        self.matchups.iter().filter(|m| m.involves(team)).count()
    }

    /// Moves every bye-involving matchup to the end, keeping relative order.
    pub fn move_byes_last(&mut self) {
        // stable sort: false (real game) before true (bye)
        self.matchups.sort_by_key(Matchup::is_bye);
    }

    /// Shuffles slot order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.matchups.shuffle(rng);
    }
}

impl From<Vec<(u8, u8)>> for Week {
    fn from(pairs: Vec<(u8, u8)>) -> Self {
        Self::new(pairs.into_iter().map(Matchup::from).collect())
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from weeks.
    pub fn from_weeks(weeks: Vec<Week>) -> Self {
        Self { weeks }
    }

    /// Appends a week.
    pub fn add_week(&mut self, week: Week) {
        self.weeks.push(week);
    }

    /// Number of weeks.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Number of sheets (the widest week).
    pub fn sheet_count(&self) -> usize {
        self.weeks.iter().map(Week::len).max().unwrap_or(0)
    }

    /// Highest real team number appearing anywhere.
    pub fn max_team_number(&self) -> usize {
        self.matchups()
            .flat_map(|m| [m.red, m.yellow])
            .filter_map(|t| t.number())
            .max()
            .map_or(0, usize::from)
    }

    /// All matchups with their `(week, sheet)` position, 0-based.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, usize, &Matchup)> {
        self.weeks.iter().enumerate().flat_map(|(w, week)| {
            week.matchups
                .iter()
                .enumerate()
                .map(move |(s, m)| (w, s, m))
        })
    }

    /// All matchups in week-major order.
    pub fn matchups(&self) -> impl Iterator<Item = &Matchup> {
        self.weeks.iter().flat_map(|w| w.matchups.iter())
    }

    /// Matchups between two real teams.
    pub fn games(&self) -> impl Iterator<Item = &Matchup> {
        self.matchups().filter(|m| !m.is_bye())
    }

    /// Number of `(BYE, BYE)` placeholder slots.
    pub fn placeholder_count(&self) -> usize {
        self.matchups().filter(|m| m.is_placeholder()).count()
    }

    /// Moves the bye matchup of every week to its last slot.
    pub fn move_byes_last(&mut self) {
        for week in &mut self.weeks {
            week.move_byes_last();
        }
    }

    /// Shuffles matchup order inside each week independently.
    pub fn shuffle_sheets<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for week in &mut self.weeks {
            week.shuffle(rng);
        }
    }

    /// Shuffles the order of weeks. Slot order inside each week is kept.
    pub fn shuffle_weeks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.weeks.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_schedule() -> Schedule {
        Schedule::from_weeks(vec![
            Week::new(vec![
                Matchup::new(Team::Bye, Team::real(3)),
                Matchup::between(1, 2),
            ]),
            Week::new(vec![
                Matchup::new(Team::Bye, Team::real(2)),
                Matchup::between(3, 1),
            ]),
            Week::new(vec![
                Matchup::new(Team::Bye, Team::real(1)),
                Matchup::between(2, 3),
            ]),
        ])
    }

    #[test]
    fn test_shape() {
        let s = sample_schedule();
        assert_eq!(s.week_count(), 3);
        assert_eq!(s.sheet_count(), 2);
        assert_eq!(s.max_team_number(), 3);
        assert_eq!(s.games().count(), 3);
        assert_eq!(s.placeholder_count(), 0);
    }

    #[test]
    fn test_move_byes_last() {
        let mut s = sample_schedule();
        s.move_byes_last();
        for week in &s.weeks {
            assert!(week.matchups.last().unwrap().is_bye());
            assert!(!week.matchups[0].is_bye());
        }
        assert_eq!(s.weeks[0].sitting_out(), Some(Team::real(3)));
    }

    #[test]
    fn test_week_bookings() {
        let week = Week::new(vec![
            Matchup::between(1, 2),
            Matchup::between(3, 1),
            Matchup::new(Team::Bye, Team::real(4)),
        ]);
        assert_eq!(week.bookings(Team::real(1)), 2);
        assert_eq!(week.bookings(Team::real(2)), 1);
        assert_eq!(week.bookings(Team::real(4)), 1);
        assert_eq!(week.bookings(Team::real(5)), 0);
    }

    #[test]
    fn test_positioned() {
        let s = sample_schedule();
        let cells: Vec<_> = s.positioned().map(|(w, sh, _)| (w, sh)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_shuffles_keep_content() {
        let original = sample_schedule();
        let mut rng = SmallRng::seed_from_u64(42);

        let mut s = original.clone();
        s.shuffle_sheets(&mut rng);
        for (a, b) in s.weeks.iter().zip(&original.weeks) {
            let mut x = a.matchups.clone();
            let mut y = b.matchups.clone();
            x.sort_by_key(Matchup::pairing);
            y.sort_by_key(Matchup::pairing);
            assert_eq!(x, y);
        }

        let mut s = original.clone();
        s.shuffle_weeks(&mut rng);
        assert_eq!(s.week_count(), 3);
        for week in &original.weeks {
            assert!(s.weeks.contains(week));
        }
    }

    #[test]
    fn test_week_from_pairs() {
        let w = Week::from(vec![(5, 8), (4, 9)]);
        assert_eq!(w.len(), 2);
        assert_eq!(w.sheet(1), Some(&Matchup::between(4, 9)));
        assert_eq!(w.sheet(2), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
