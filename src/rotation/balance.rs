//! Red/yellow role balancing.
//!
//! The circle method always gives the fixed seat (team 1) the red role.
//! For even team counts, swapping the first matchup of every odd-indexed
//! round alternates team 1's colour; every other team already alternates
//! because the rotation moves it between the top and bottom halves.
//! Odd team counts need no swap: the bye holds the fixed seat.

use crate::models::Schedule;

/// Balances red/yellow roles of a freshly generated circle rotation.
///
/// Must run on the rotation's original week order, before any shuffle.
pub fn balance_roles(schedule: &mut Schedule, team_count: usize) {
    if team_count % 2 == 1 {
        return;
    }

    for week in schedule.weeks.iter_mut().skip(1).step_by(2) {
        if let Some(first) = week.matchups.first_mut() {
            *first = first.swapped();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Team, Week};
    use crate::rotation::CircleRotation;

    fn role_counts(schedule: &Schedule, team_count: usize) -> Vec<(i32, i32)> {
        let mut counts = vec![(0, 0); team_count + 1];
        for m in schedule.games() {
            counts[m.red.index()].0 += 1;
            counts[m.yellow.index()].1 += 1;
        }
        counts
    }

    #[test]
    fn test_four_teams_swaps_second_round() {
        let mut s = CircleRotation::new(4).generate();
        balance_roles(&mut s, 4);
        assert_eq!(s.weeks[0], Week::from(vec![(1, 4), (2, 3)]));
        assert_eq!(s.weeks[1], Week::from(vec![(3, 1), (4, 2)]));
        assert_eq!(s.weeks[2], Week::from(vec![(1, 2), (3, 4)]));
    }

    #[test]
    fn test_even_counts_within_one() {
        for n in (2..=12).step_by(2) {
            let mut s = CircleRotation::new(n).generate();
            balance_roles(&mut s, n);
            for (team, (red, yellow)) in role_counts(&s, n).into_iter().enumerate().skip(1) {
                assert_eq!(red + yellow, (n - 1) as i32);
                assert!(
                    (red - yellow).abs() <= 1,
                    "{n} teams: team {team} has {red} red, {yellow} yellow"
                );
            }
        }
    }

    #[test]
    fn test_unbalanced_without_swap() {
        let s = CircleRotation::new(8).generate();
        let counts = role_counts(&s, 8);
        // team 1 holds the fixed seat and is always red
        assert_eq!(counts[1], (7, 0));
    }

    #[test]
    fn test_odd_counts_exactly_balanced() {
        for n in (3..=13).step_by(2) {
            let mut s = CircleRotation::new(n).generate();
            let before = s.clone();
            balance_roles(&mut s, n);
            assert_eq!(s, before, "odd counts are left untouched");

            for (team, (red, yellow)) in role_counts(&s, n).into_iter().enumerate().skip(1) {
                assert_eq!(red, yellow, "{n} teams: team {team}");
            }
        }
    }

    #[test]
    fn test_bye_matchup_never_swapped() {
        let mut s = CircleRotation::new(7).generate();
        balance_roles(&mut s, 7);
        assert!(s.weeks.iter().all(|w| w.matchups[0].red == Team::Bye));
    }
}
