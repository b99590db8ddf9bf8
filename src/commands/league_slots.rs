//! League slots command implementation

use crate::{
    core::league_settings_path,
    yahoo::{
        cache_settings::{load_or_fetch_league_settings, CacheStatus},
        http::YahooClient,
        parse_league_slots, parse_league_summary,
    },
    LeagueKey, Result,
};

use super::resolve_league_key;

/// Handle the league slots command
pub async fn handle_league_slots(
    league_key: Option<LeagueKey>,
    refresh: bool,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let league_key = resolve_league_key(league_key)?;
    let client = YahooClient::from_env()?;

    if verbose {
        if refresh {
            println!("Fetching fresh league settings from Yahoo...");
        } else {
            println!("Loading league settings (cached if available)...");
        }
    }

    let (payload, cache_status) = load_or_fetch_league_settings(&client, &league_key, refresh).await?;
    let slots = parse_league_slots(&payload)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    let summary = parse_league_summary(&payload)?;
    match summary.name.as_deref() {
        Some(name) => println!("{} ({})", name, league_key),
        None => println!("League {}", league_key),
    }
    if let Some(week) = summary.current_week {
        println!("Current week: {}", week);
    }
    for (slot, count) in slots.iter() {
        println!("  {:<8} {}", slot, count);
    }
    println!("Total positions: {}", slots.total());

    if verbose {
        let source = match cache_status {
            CacheStatus::Hit => "cache",
            CacheStatus::Miss => "Yahoo (cache miss)",
            CacheStatus::Refreshed => "Yahoo (refreshed)",
        };
        println!("Settings loaded from {}", source);
        println!("League settings cached at: {}", league_settings_path(&league_key).display());
    }

    Ok(())
}
