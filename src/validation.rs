//! Structural validation for league schedules.
//!
//! Checks a finished schedule against the round-robin invariants and
//! collects every problem found. Detects:
//! - Missing or repeated pairings
//! - Teams missing from a week or booked twice in it
//! - Byes outside the last slot (odd counts) or anywhere (even counts)
//! - Teams over the per-sheet cap
//! - Red/yellow imbalance above one game
//! - Placeholder cells left by the sheet solver

use std::collections::HashMap;

use crate::models::{Schedule, Team};
use crate::scheduler::UsageStats;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Two teams never meet.
    MissingPairing,
    /// Two teams meet more than once.
    DuplicatePairing,
    /// A team neither plays nor sits out in some week.
    TeamMissing,
    /// A team appears more than once in some week.
    TeamDoubleBooked,
    /// A team number outside `1..=N`.
    UnknownTeam,
    /// Bye matchup missing, repeated, or not in the last slot.
    MisplacedBye,
    /// A team plays on one sheet more often than the cap allows.
    SheetCapExceeded,
    /// A team's red and yellow counts differ by more than one.
    RoleImbalance,
    /// A `(BYE, BYE)` placeholder left by the solver.
    UnresolvedCell,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule for `team_count` teams.
///
/// Checks:
/// 1. No placeholder cells
/// 2. Every real team once per week, except the odd-count bye
/// 3. Odd counts: exactly one bye matchup per week, in the last slot;
///    even counts: no bye matchups
/// 4. Every pair of teams meets exactly once
/// 5. No team above `sheet_cap` on any sheet (skipped when `None`)
/// 6. `|red - yellow| <= 1` for every team
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(
    schedule: &Schedule,
    team_count: usize,
    sheet_cap: Option<u32>,
) -> ValidationResult {
    let mut errors = Vec::new();
    let odd = team_count % 2 == 1;

    for (w, week) in schedule.weeks.iter().enumerate() {
        let week_no = w + 1;
        let mut bye_slots = Vec::new();

        for (slot, m) in week.matchups.iter().enumerate() {
            if m.is_placeholder() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnresolvedCell,
                    format!("Week {week_no} sheet {} is unresolved", slot + 1),
                ));
                continue;
            }
            if m.is_bye() {
                bye_slots.push(slot);
            }
            for team in [m.red, m.yellow] {
                if let Team::Real(n) = team {
                    if usize::from(n) > team_count {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::UnknownTeam,
                            format!("Week {week_no} schedules unknown team {n}"),
                        ));
                    }
                }
            }
        }

        if odd {
            let last = week.len().saturating_sub(1);
            if bye_slots != [last] {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MisplacedBye,
                    format!(
                        "Week {week_no} should have one bye in slot {}, found {:?}",
                        last + 1,
                        bye_slots.iter().map(|s| s + 1).collect::<Vec<_>>()
                    ),
                ));
            }
        } else if !bye_slots.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MisplacedBye,
                format!("Week {week_no} has a bye with an even team count"),
            ));
        }

        for n in 1..=team_count {
            match week.bookings(Team::Real(n as u8)) {
                0 => errors.push(ValidationError::new(
                    ValidationErrorKind::TeamMissing,
                    format!("Team {n} is missing from week {week_no}"),
                )),
                1 => {}
                k => errors.push(ValidationError::new(
                    ValidationErrorKind::TeamDoubleBooked,
                    format!("Team {n} appears {k} times in week {week_no}"),
                )),
            }
        }
    }

    check_pairings(schedule, team_count, &mut errors);

    let stats = UsageStats::calculate(schedule, team_count);
    for usage in stats.teams() {
        if let Some(cap) = sheet_cap {
            for (sheet, &count) in usage.sheets.iter().enumerate() {
                if count > cap {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::SheetCapExceeded,
                        format!(
                            "Team {} plays {count} times on sheet {} (cap {cap})",
                            usage.team,
                            sheet + 1
                        ),
                    ));
                }
            }
        }
        if usage.role_difference().abs() > 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::RoleImbalance,
                format!(
                    "Team {} has {} red and {} yellow",
                    usage.team, usage.red, usage.yellow
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Every unordered pair of real teams must meet exactly once.
fn check_pairings(schedule: &Schedule, team_count: usize, errors: &mut Vec<ValidationError>) {
    let mut meetings: HashMap<(Team, Team), usize> = HashMap::new();
    for m in schedule.games() {
        *meetings.entry(m.pairing()).or_default() += 1;
    }

    for a in 1..=team_count {
        for b in (a + 1)..=team_count {
            let key = (Team::Real(a as u8), Team::Real(b as u8));
            match meetings.get(&key).copied().unwrap_or(0) {
                0 => errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPairing,
                    format!("Teams {a} and {b} never meet"),
                )),
                1 => {}
                k => errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicatePairing,
                    format!("Teams {a} and {b} meet {k} times"),
                )),
            }
        }
    }
}
