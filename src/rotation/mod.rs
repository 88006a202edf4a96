//! Pairing generation: who plays whom, in which week, in which colour.
//!
//! - [`CircleRotation`]: circle-method single round robin for any count.
//! - [`balance_roles`]: red/yellow parity swap for even counts.
//! - [`FixedTable`]: curated twelve-team tables that replace both.

mod balance;
mod circle;
mod fixed;

pub use balance::balance_roles;
pub use circle::CircleRotation;
pub use fixed::{FixedTable, FIXED_TEAM_COUNT};
