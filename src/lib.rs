//! Round-robin league scheduling for the U-Engine ecosystem.
//!
//! Builds a single round-robin schedule where every match has two
//! distinguishable roles (red and yellow stones in curling) and is played
//! on one of several sheets. Roles are balanced per team and no team plays
//! on any one sheet more than twice.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Team`, `Matchup`, `Week`, `Schedule`
//! - **`rotation`**: Circle-method pairings, role balancing, curated
//!   twelve-team tables
//! - **`cp`**: Backtracking sheet assignment under the per-sheet cap
//! - **`scheduler`**: `LeagueScheduler` orchestration and `UsageStats`
//! - **`validation`**: Round-robin invariant checks
//! - **`render`**: Team report, week table, CSV output
//! - **`config`**, **`error`**: Run settings and error types
//!
//! # Example
//!
//! ```
//! use u_roundrobin::config::ScheduleConfig;
//! use u_roundrobin::scheduler::LeagueScheduler;
//!
//! let league = LeagueScheduler::new(ScheduleConfig::new(7).with_seed(3))
//!     .run()
//!     .unwrap();
//! assert_eq!(league.schedule.week_count(), 7);
//! assert!(league.is_valid());
//! ```
//!
//! # References
//!
//! - Lucas (1883), "Récréations mathématiques" (circle method)
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6

pub mod config;
pub mod cp;
pub mod error;
pub mod models;
pub mod render;
pub mod rotation;
pub mod scheduler;
pub mod validation;

pub use config::ScheduleConfig;
pub use error::ScheduleError;
pub use scheduler::{LeagueSchedule, LeagueScheduler};
