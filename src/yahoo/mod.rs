//! Yahoo Fantasy Sports API access and payload normalization
//!
//! - `http`: REST client for league settings and team rosters
//! - `cache_settings`: on-disk cache for league settings payloads
//! - `fragments`: decoder for Yahoo's fragment-array JSON encoding
//! - `normalize`: payload → `LeagueSlots` / `RosteredPlayer`
//! - `types`: the flat roster model

pub mod cache_settings;
pub mod fragments;
pub mod http;
pub mod normalize;
pub mod types;

pub use normalize::{parse_league_slots, parse_league_summary, parse_roster};
pub use types::{LeagueSlots, LeagueSummary, RosteredPlayer, SlotMap};
