//! Type-safe wrappers for Yahoo Fantasy Football keys and weeks.

pub mod ids;
pub mod time;

pub use ids::{LeagueKey, TeamKey};
pub use time::Week;
