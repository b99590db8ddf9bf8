//! Yahoo Fantasy Football Lineup Library
//!
//! Reads Yahoo Fantasy Sports league settings and team rosters, flattens
//! Yahoo's fragment-array JSON into typed roster data, and fills a league's
//! starting slots with a greedy best-fit optimizer.
//!
//! ## Features
//!
//! - **Payload Normalization**: Order-independent decoding of Yahoo's nested
//!   fragment arrays and counted collections
//! - **Lineup Optimization**: Position-weighted greedy slot filling with
//!   injury-status penalties and flex eligibility
//! - **Start/Sit Advice**: Recommendations relative to the current lineup
//! - **Settings Cache**: League settings cached on disk between runs
//!
//! ## Quick Start
//!
//! ```rust
//! use yahoo_ffl::{lineup::optimize, LeagueSlots, RosteredPlayer};
//!
//! let slots: LeagueSlots = vec![("RB", 1), ("W/R/T", 1)].into_iter().collect();
//! let roster = vec![
//!     RosteredPlayer::new("449.p.1", "Lead Back", &["RB", "W/R/T"]),
//!     RosteredPlayer::new("449.p.2", "Slot Receiver", &["WR", "W/R/T"]).with_status("Q"),
//! ];
//!
//! let lineup = optimize(&slots, &roster);
//! assert_eq!(lineup.slot_of("449.p.1"), Some("RB"));
//! assert_eq!(lineup.slot_of("449.p.2"), Some("W/R/T"));
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export YAHOO_ACCESS_TOKEN=...            # OAuth 2.0 bearer token
//! export YAHOO_FFL_TEAM_KEY=449.l.123456.t.3
//! export YAHOO_FFL_LEAGUE_KEY=449.l.123456 # for league-slots; lineup uses the team's league
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod lineup;
pub mod yahoo;

// Re-export commonly used types
pub use cli::types::{LeagueKey, TeamKey, Week};
pub use error::{LineupError, Result};
pub use lineup::{OptimalLineup, Recommendations};
pub use yahoo::{LeagueSlots, RosteredPlayer};

pub const LEAGUE_KEY_ENV_VAR: &str = "YAHOO_FFL_LEAGUE_KEY";
pub const TEAM_KEY_ENV_VAR: &str = "YAHOO_FFL_TEAM_KEY";
pub const ACCESS_TOKEN_ENV_VAR: &str = "YAHOO_ACCESS_TOKEN";
pub const BASE_URL_ENV_VAR: &str = "YAHOO_FFL_BASE_URL";
pub const CACHE_DIR_ENV_VAR: &str = "YAHOO_FFL_CACHE_DIR";
