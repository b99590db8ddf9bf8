// src/yahoo/cache_settings.rs
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{league_settings_path, try_read_to_string, write_string};
use crate::yahoo::{http::YahooClient, normalize::parse_league_slots};
use crate::{LeagueKey, Result};

/// Where a settings payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

/// Try to load the raw league settings payload from the cache first. If it is
/// missing, unreadable or `refresh == true`, fetch from Yahoo and re-write the
/// cache.
pub async fn load_or_fetch_league_settings(
    client: &YahooClient,
    league_key: &LeagueKey,
    refresh: bool,
) -> Result<(Value, CacheStatus)> {
    let path = league_settings_path(league_key);
    load_or_fetch_league_settings_at(client, league_key, refresh, &path).await
}

/// Same as [`load_or_fetch_league_settings`] with an explicit cache file.
pub async fn load_or_fetch_league_settings_at(
    client: &YahooClient,
    league_key: &LeagueKey,
    refresh: bool,
    path: &Path,
) -> Result<(Value, CacheStatus)> {
    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(cached) = try_read_to_string(path).and_then(|s| read_cached(&s)) {
            debug!(path = %path.display(), "league settings cache hit");
            return Ok((cached, CacheStatus::Hit));
        }
    }

    // 2) Fetch from API
    let payload = client.get_league_settings(league_key).await?;

    // 3) Write cache, but only a payload we can actually read back
    if parse_league_slots(&payload).is_ok() {
        if let Ok(json_str) = serde_json::to_string_pretty(&payload) {
            if let Err(e) = write_string(path, &json_str) {
                warn!(path = %path.display(), error = %e, "could not write league settings cache");
            }
        }
    }

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((payload, status))
}

/// Cached text is only trusted when it still normalizes into league slots.
fn read_cached(s: &str) -> Option<Value> {
    let value: Value = serde_json::from_str(s).ok()?;
    parse_league_slots(&value).ok()?;
    Some(value)
}
