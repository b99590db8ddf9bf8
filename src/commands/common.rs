//! Shared pieces of the lineup commands: running the core on raw payloads and
//! printing the result.

use serde_json::Value;

use crate::{
    error::{ErrorBody, LineupError},
    lineup::{optimize, tables::is_reserve_slot, OptimalLineup},
    yahoo::{parse_league_slots, parse_roster, LeagueSlots, RosteredPlayer},
    Result,
};

/// Normalize both payloads and run the optimizer.
///
/// A payload without its envelope fails with `parse_error`, and so does a pair
/// that normalizes to no slots *and* no players: that means we could not read
/// the data, not that the league is empty.
pub fn build_lineup(settings: &Value, roster: &Value) -> Result<(LeagueSlots, OptimalLineup)> {
    let slots = parse_league_slots(settings)?;
    let players = parse_roster(roster)?;
    ensure_readable(&slots, &players)?;

    let lineup = optimize(&slots, &players);
    Ok((slots, lineup))
}

fn ensure_readable(slots: &LeagueSlots, players: &[RosteredPlayer]) -> Result<()> {
    if slots.is_empty() && players.is_empty() {
        return Err(LineupError::parse(
            "league",
            "neither roster positions nor players could be read",
        ));
    }
    Ok(())
}

/// Print a lineup as pretty JSON or as a text table.
pub fn print_lineup(slots: &LeagueSlots, lineup: &OptimalLineup, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(lineup)?);
        return Ok(());
    }

    print!("{}", render_lineup(slots, lineup));
    Ok(())
}

/// Print a failure for `--json` consumers.
pub fn print_error_json(err: &LineupError) {
    let body = ErrorBody::from(err);
    match serde_json::to_string_pretty(&body) {
        Ok(s) => println!("{}", s),
        Err(_) => println!("{{\"error\": \"{}\"}}", body.error),
    }
}

/// Text rendering of a lineup.
pub fn render_lineup(slots: &LeagueSlots, lineup: &OptimalLineup) -> String {
    let mut out = String::new();

    if lineup.starters.is_empty() {
        out.push_str("No eligible players found for any starting slot.\n");
    } else {
        out.push_str("Optimal lineup\n");
        for (slot, &required) in slots.iter().filter(|(slot, _)| !is_reserve_slot(slot)) {
            let players = lineup.starters.get(slot).map_or(&[][..], Vec::as_slice);
            for player in players {
                out.push_str(&format!("  {:<8} {}\n", slot, player_line(player)));
            }
            for _ in players.len()..required as usize {
                out.push_str(&format!("  {:<8} (empty)\n", slot));
            }
        }
    }

    if !lineup.bench.is_empty() {
        out.push_str("Bench\n");
        for player in &lineup.bench {
            out.push_str(&format!("  {:<8} {}\n", player.current_slot(), player_line(player)));
        }
    }

    if !lineup.recommendations.reasons.is_empty() {
        out.push_str("Recommendations\n");
        for reason in &lineup.recommendations.reasons {
            out.push_str(&format!("  - {}\n", reason));
        }
    }

    out
}

fn player_line(player: &RosteredPlayer) -> String {
    let mut line = player.name.clone();
    if let Some(team) = &player.team {
        line.push_str(&format!(" ({})", team));
    }
    if let Some(status) = &player.status {
        line.push_str(&format!(" [{}]", status));
    }
    line
}
