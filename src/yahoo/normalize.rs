//! Canonicalize Yahoo league settings and team rosters into flat types.
//!
//! Only a missing envelope is fatal. Anything malformed below it is skipped or
//! defaulted so one odd player never sinks the whole roster.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{LineupError, Result};
use crate::yahoo::fragments::{
    coerce_u32, extract_collection, find_fragment, merge_fields, Collection,
};
use crate::yahoo::types::{LeagueSlots, LeagueSummary, RosteredPlayer, BENCH_SLOT};


const ROSTER_POSITION_FIELDS: &[&str] = &["position", "count"];

const PLAYER_FIELDS: &[&str] = &[
    "player_key",
    "name",
    "status",
    "editorial_team_abbr",
    "eligible_positions",
    "selected_position",
];

const LEAGUE_FIELDS: &[&str] = &["league_key", "name", "current_week", "scoring_type"];

/// Resolve `fantasy_content.<key>`; the `fantasy_content` wrapper is optional.
fn envelope<'a>(payload: &'a Value, key: &str) -> Result<&'a Value> {
    let root = payload.get("fantasy_content").unwrap_or(payload);
    root.get(key)
        .filter(|v| v.is_array() || v.is_object())
        .ok_or_else(|| LineupError::parse(key, format!("response has no `{}` object", key)))
}

/// Parse the league's roster-position requirements out of a settings payload.
pub fn parse_league_slots(payload: &Value) -> Result<LeagueSlots> {
    let league = envelope(payload, "league")?;
    let settings = find_fragment(league, "settings")
        .ok_or_else(|| LineupError::parse("league", "league response has no `settings`"))?;

    let mut slots = LeagueSlots::new();
    let Some(positions) = extract_collection(settings, "roster_positions") else {
        warn!("league settings carry no roster_positions; league has no starting slots");
        return Ok(slots);
    };

    for leaf in positions.leaves("roster_position") {
        let bag = merge_fields(leaf, ROSTER_POSITION_FIELDS);
        let position = bag.str("position");
        let count = bag.get("count").and_then(coerce_u32);
        match (position, count) {
            (Some(position), Some(count)) => {
                if slots.insert(position, count).is_some() {
                    debug!(position, count, "duplicate roster position, keeping last");
                }
            }
            _ => debug!(?leaf, "skipping malformed roster_position"),
        }
    }

    Ok(slots)
}

/// Parse a team roster payload into players, in roster order.
pub fn parse_roster(payload: &Value) -> Result<Vec<RosteredPlayer>> {
    let team = envelope(payload, "team")?;
    let roster = extract_collection(team, "roster")
        .ok_or_else(|| LineupError::parse("roster", "team response has no `roster`"))?;

    // Yahoo's roster wrapper holds `"0": {"players": ..}` next to coverage
    // fields and usually no `count`.
    let entries = if roster.has_count() {
        roster.entries()
    } else {
        roster.consecutive_entries()
    };

    let mut players = Vec::new();
    for entry in entries {
        let Some(collection) = extract_collection(entry, "players") else {
            continue;
        };
        players.extend(collection.leaves("player").into_iter().filter_map(parse_player));
    }

    debug!(count = players.len(), "parsed roster");
    Ok(players)
}

/// League identity fields, when present in a league payload.
pub fn parse_league_summary(payload: &Value) -> Result<LeagueSummary> {
    let league = envelope(payload, "league")?;
    let bag = merge_fields(league, LEAGUE_FIELDS);

    Ok(LeagueSummary {
        league_key: bag.str("league_key").map(str::to_string),
        name: bag.str("name").map(str::to_string),
        current_week: bag
            .get("current_week")
            .and_then(coerce_u32)
            .and_then(|w| u16::try_from(w).ok()),
        scoring_type: bag.str("scoring_type").map(str::to_string),
    })
}

fn parse_player(leaf: &Value) -> Option<RosteredPlayer> {
    let bag = merge_fields(leaf, PLAYER_FIELDS);

    let player_key = bag.str("player_key");
    let name = bag.get("name").and_then(display_name);
    if player_key.is_none() && name.is_none() {
        debug!("skipping roster entry without player_key or name");
        return None;
    }

    let mut eligible_positions = Vec::new();
    if let Some(value) = bag.get("eligible_positions") {
        collect_positions(value, &mut eligible_positions);
    }

    let selected_position = bag
        .get("selected_position")
        .and_then(selected_slot)
        .unwrap_or(BENCH_SLOT)
        .to_string();

    Some(RosteredPlayer {
        player_key: player_key.unwrap_or_default().to_string(),
        name: name.unwrap_or_default(),
        status: bag.str("status").map(str::to_string),
        team: bag.str("editorial_team_abbr").map(str::to_string),
        eligible_positions,
        selected_position: Some(selected_position),
    })
}

/// `{"full": "..."}` or a bare string.
fn display_name(value: &Value) -> Option<String> {
    let name = match value {
        Value::Object(map) => map.get("full").and_then(Value::as_str),
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Gather position tokens from strings, `{position}` objects, arrays and
/// counted collections of any of those. Duplicates are dropped.
fn collect_positions(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let token = s.trim();
            if !token.is_empty() && !out.iter().any(|p| p == token) {
                out.push(token.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_positions(item, out);
            }
        }
        Value::Object(map) => match map.get("position") {
            Some(position) => collect_positions(position, out),
            None => {
                for entry in Collection::new(value).entries() {
                    collect_positions(entry, out);
                }
            }
        },
        _ => {}
    }
}

/// `selected_position` is a fragment array holding `{position}` or a string.
fn selected_slot(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        other => find_fragment(other, "position").and_then(Value::as_str),
    }
    .map(str::trim)
    .filter(|s| !s.is_empty())
}
