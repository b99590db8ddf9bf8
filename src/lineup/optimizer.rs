//! Greedy best-fit lineup optimizer.
//!
//! Slots are filled in league order. Each repetition of a slot takes the
//! highest-scoring eligible player still on the bench, first-encountered on
//! ties, and never revisits an earlier pick. That makes it deterministic but
//! only locally greedy: a player taken for an early slot is not traded back
//! even when a later slot would have needed them more.

use tracing::{debug, warn};

use crate::lineup::tables::{
    flex_union, is_known_slot, is_reserve_slot, position_weight, slot_weight, status_penalty,
    Position,
};
use crate::lineup::types::{OptimalLineup, Recommendations};
use crate::yahoo::types::{LeagueSlots, RosteredPlayer, SlotMap};


/// Heuristic value of putting `player` in `slot`.
///
/// The base is the slot's own weight (a flex slot takes its best member's
/// weight). For slots outside the weight table the player's best eligible
/// position weight is used instead. The status penalty is added on top.
pub fn score(player: &RosteredPlayer, slot: &str) -> i32 {
    let base = slot_weight(slot).unwrap_or_else(|| own_best_weight(player));
    base + status_penalty(player.status.as_deref())
}

fn own_best_weight(player: &RosteredPlayer) -> i32 {
    player
        .eligible_positions
        .iter()
        .filter_map(|p| position_weight(p))
        .max()
        .unwrap_or(0)
}

/// Whether `player` may occupy `slot`.
///
/// Flex slots require eligibility at one of their member positions; carrying
/// the flex token itself is not enough. Any other slot needs a literal match.
pub fn is_eligible(player: &RosteredPlayer, slot: &str) -> bool {
    match flex_union(slot) {
        Some(members) => player
            .eligible_positions
            .iter()
            .filter_map(|p| p.parse::<Position>().ok())
            .any(|p| members.contains(&p)),
        None => player.eligible_positions.iter().any(|p| p == slot),
    }
}

/// Assign roster players to the league's starting slots.
///
/// Never fails: an empty slot map or roster yields no starters and the whole
/// roster on the bench. Reserve slots (`BN`, `IR`, `IR+`) are not filled.
pub fn optimize(slots: &LeagueSlots, roster: &[RosteredPlayer]) -> OptimalLineup {
    let mut bench: Vec<RosteredPlayer> = roster.to_vec();
    let mut starters: SlotMap<Vec<RosteredPlayer>> = SlotMap::new();

    for (slot, &count) in slots.iter() {
        if is_reserve_slot(slot) {
            continue;
        }
        if !is_known_slot(slot) {
            warn!(slot, "unrecognized roster slot; only players listing it literally can fill it");
        }

        for filled in 0..count {
            let Some(idx) = best_candidate(&bench, slot) else {
                debug!(slot, filled, required = count, "slot left under-filled");
                break;
            };
            let player = bench.remove(idx);
            match starters.get_mut(slot) {
                Some(players) => players.push(player),
                None => {
                    starters.insert(slot, vec![player]);
                }
            }
        }
    }

    let recommendations = recommend(&starters, &bench);
    OptimalLineup {
        starters,
        bench,
        recommendations,
    }
}

/// Index of the best eligible bench player; ties keep the earliest.
fn best_candidate(bench: &[RosteredPlayer], slot: &str) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (idx, player) in bench.iter().enumerate() {
        if !is_eligible(player, slot) {
            continue;
        }
        let value = score(player, slot);
        if best.map_or(true, |(_, top)| value > top) {
            best = Some((idx, value));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Diff the optimizer's placement against each player's current slot.
pub fn recommend(
    starters: &SlotMap<Vec<RosteredPlayer>>,
    bench: &[RosteredPlayer],
) -> Recommendations {
    let mut recs = Recommendations::default();

    for (slot, players) in starters.iter() {
        for player in players.iter().filter(|p| p.current_slot() != slot) {
            recs.reasons.push(start_reason(player, slot));
            recs.start.push(player.clone());
        }
    }

    for player in bench.iter().filter(|p| !is_reserve_slot(p.current_slot())) {
        recs.reasons.push(sit_reason(player));
        recs.sit.push(player.clone());
    }

    recs
}

fn start_reason(player: &RosteredPlayer, slot: &str) -> String {
    let current = player.current_slot();
    let mut reason = if is_reserve_slot(current) {
        format!("Start {} at {} (currently {})", player.name, slot, current)
    } else {
        format!("Move {} from {} to {}", player.name, current, slot)
    };
    if let Some(status) = player.status.as_deref() {
        reason.push_str(&format!(", listed {}", status));
    }
    reason
}

fn sit_reason(player: &RosteredPlayer) -> String {
    match player.status.as_deref() {
        Some(status) if status_penalty(Some(status)) < 0 => format!(
            "Sit {} (currently {}): listed {}",
            player.name,
            player.current_slot(),
            status
        ),
        _ => format!(
            "Sit {} (currently {}): better options fill every eligible slot",
            player.name,
            player.current_slot()
        ),
    }
}
