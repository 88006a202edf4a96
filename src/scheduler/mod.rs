//! League orchestration and usage statistics.
//!
//! # Orchestration
//!
//! `LeagueScheduler` picks the pairing source for the team count, runs
//! role balancing and sheet assignment where needed, and returns the
//! finished schedule with its statistics.
//!
//! # Statistics
//!
//! `UsageStats` counts red/yellow roles and per-sheet appearances per
//! team. It doubles as the constraint oracle of the sheet solver.

mod league;
mod stats;

pub use league::{LeagueSchedule, LeagueScheduler, ScheduleSource};
pub use stats::{TeamUsage, UsageStats};
