//! Optimal lineup command: fetch settings and roster, then optimize.

use tracing::debug;

use crate::{
    yahoo::{cache_settings::load_or_fetch_league_settings, http::YahooClient},
    LeagueKey, LineupError, Result, TeamKey, Week,
};

use super::{
    common::{build_lineup, print_error_json, print_lineup},
    resolve_team_key,
};

/// Parameters for the lineup command
#[derive(Debug, Clone)]
pub struct LineupParams {
    pub team_key: Option<TeamKey>,
    pub league_key: Option<LeagueKey>,
    pub week: Option<Week>,
    pub refresh: bool,
    pub as_json: bool,
    pub verbose: bool,
}

/// Handle the lineup command
pub async fn handle_lineup(params: LineupParams) -> Result<()> {
    let result = run(&params).await;
    if let Err(e) = &result {
        if params.as_json {
            print_error_json(e);
        }
    }
    result
}

async fn run(params: &LineupParams) -> Result<()> {
    let team_key = resolve_team_key(params.team_key.clone())?;
    let league_key = lineup_league_key(&team_key, params.league_key.clone())?;
    let client = YahooClient::from_env()?;

    if params.verbose {
        println!("Fetching league {} settings and team {} roster...", league_key, team_key);
    }

    let ((settings, cache_status), roster) = tokio::try_join!(
        load_or_fetch_league_settings(&client, &league_key, params.refresh),
        client.get_team_roster(&team_key, params.week),
    )?;
    debug!(?cache_status, "league settings loaded");

    let (slots, lineup) = build_lineup(&settings, &roster)?;

    if params.verbose {
        println!(
            "✓ {} starting positions, {} players on roster",
            slots.total(),
            lineup.starter_count() + lineup.bench.len()
        );
    }

    print_lineup(&slots, &lineup, params.as_json)
}

/// The team key already names its league, so slots always come from that
/// league. An explicit `--league-key` must agree with it.
fn lineup_league_key(team_key: &TeamKey, explicit: Option<LeagueKey>) -> Result<LeagueKey> {
    let own = team_key.league_key();
    match explicit {
        Some(key) if key != own => Err(LineupError::LeagueMismatch {
            league_key: key.to_string(),
            team_key: team_key.to_string(),
        }),
        _ => Ok(own),
    }
}
