//! Output models for the lineup optimizer.

use serde::Serialize;

use crate::yahoo::types::{RosteredPlayer, SlotMap};

/// Start/sit advice relative to the team's current lineup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub start: Vec<RosteredPlayer>,
    pub sit: Vec<RosteredPlayer>,
    pub reasons: Vec<String>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.sit.is_empty()
    }
}

/// Result of one optimizer run. Recomputed per request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptimalLineup {
    /// Slot → players placed there. Slots nobody could fill are absent.
    pub starters: SlotMap<Vec<RosteredPlayer>>,
    pub bench: Vec<RosteredPlayer>,
    pub recommendations: Recommendations,
}

impl OptimalLineup {
    /// Number of players placed in starting slots.
    pub fn starter_count(&self) -> usize {
        self.starters.iter().map(|(_, players)| players.len()).sum()
    }

    /// Slot a player was placed in, looked up by player key.
    pub fn slot_of(&self, player_key: &str) -> Option<&str> {
        self.starters
            .iter()
            .find(|(_, players)| players.iter().any(|p| p.player_key == player_key))
            .map(|(slot, _)| slot)
    }
}
