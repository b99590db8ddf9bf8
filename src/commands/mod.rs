//! Command implementations for the Yahoo Fantasy Football lineup CLI

pub mod common;
pub mod league_slots;
pub mod lineup;
pub mod lineup_files;

use crate::{
    error::LineupError, LeagueKey, Result, TeamKey, LEAGUE_KEY_ENV_VAR, TEAM_KEY_ENV_VAR,
};


/// League key from the CLI, else from `YAHOO_FFL_LEAGUE_KEY`.
pub fn resolve_league_key(league_key: Option<LeagueKey>) -> Result<LeagueKey> {
    if let Some(key) = league_key {
        return Ok(key);
    }
    match std::env::var(LEAGUE_KEY_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Err(LineupError::MissingLeagueKey {
            env_var: LEAGUE_KEY_ENV_VAR.to_string(),
        }),
    }
}

/// Team key from the CLI, else from `YAHOO_FFL_TEAM_KEY`.
pub fn resolve_team_key(team_key: Option<TeamKey>) -> Result<TeamKey> {
    if let Some(key) = team_key {
        return Ok(key);
    }
    match std::env::var(TEAM_KEY_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Err(LineupError::MissingTeamKey {
            env_var: TEAM_KEY_ENV_VAR.to_string(),
        }),
    }
}
