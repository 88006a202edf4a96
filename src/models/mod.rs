//! League scheduling domain models.
//!
//! Provides the data types shared by the rotation generator, the sheet
//! solver, and the statistics engine.
//!
//! # Domain Mappings
//!
//! | u-roundrobin | Curling | Chess | Tennis |
//! |--------------|---------|-------|--------|
//! | Team | Rink/Team | Player | Player/Pair |
//! | Matchup (red, yellow) | Stone colours | White/Black | Serve first |
//! | Sheet | Sheet of ice | Board | Court |
//! | Week | Draw | Round | Round |

mod matchup;
mod schedule;
mod team;

pub use matchup::Matchup;
pub use schedule::{Schedule, Week};
pub use team::Team;
