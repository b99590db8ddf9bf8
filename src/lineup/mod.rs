//! Lineup optimization over a normalized roster
//!
//! - `tables`: position weights, status penalties and flex unions
//! - `optimizer`: greedy slot assignment and start/sit diff
//! - `types`: optimizer output

pub mod optimizer;
pub mod tables;
pub mod types;

pub use optimizer::{is_eligible, optimize, recommend, score};
pub use types::{OptimalLineup, Recommendations};
