use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};


/// Insertion-ordered map keyed by roster slot token (`QB`, `W/R/T`, ...).
///
/// Yahoo declares roster positions in a meaningful order and the optimizer
/// walks slots in that order, so a hash map is not an option here. Inserting
/// an existing slot overwrites its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for SlotMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> SlotMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the previous value for the slot, if any.
    pub fn insert(&mut self, slot: impl Into<String>, value: V) -> Option<V> {
        let slot = slot.into();
        match self.entries.iter_mut().find(|(s, _)| *s == slot) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((slot, value));
                None
            }
        }
    }

    pub fn get(&self, slot: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(s, _)| s == slot)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, slot: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(s, _)| s == slot)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.get(slot).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(s, v)| (s.as_str(), v))
    }

    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SlotMap<u32> {
    /// Total number of positions across every slot.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, c)| *c).sum()
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for SlotMap<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut map = SlotMap::new();
        for (slot, value) in iter {
            map.insert(slot, value);
        }
        map
    }
}

impl<V> IntoIterator for SlotMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for SlotMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (slot, value) in &self.entries {
            map.serialize_entry(slot, value)?;
        }
        map.end()
    }
}

/// Roster slot token → number of starting positions the league requires.
pub type LeagueSlots = SlotMap<u32>;

/// One player on a fantasy roster, flattened out of Yahoo's fragment arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosteredPlayer {
    pub player_key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default)]
    pub eligible_positions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_position: Option<String>,
}

impl RosteredPlayer {
    /// Healthy player currently on the bench, eligible for the given tokens.
    pub fn new(player_key: impl Into<String>, name: impl Into<String>, eligible: &[&str]) -> Self {
        Self {
            player_key: player_key.into(),
            name: name.into(),
            status: None,
            team: None,
            eligible_positions: eligible.iter().map(|p| p.to_string()).collect(),
            selected_position: Some(BENCH_SLOT.to_string()),
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn with_selected(mut self, slot: &str) -> Self {
        self.selected_position = Some(slot.to_string());
        self
    }

    /// Current slot, treating a missing selection as the bench.
    pub fn current_slot(&self) -> &str {
        self.selected_position.as_deref().unwrap_or(BENCH_SLOT)
    }
}

/// Yahoo's bench marker for `selected_position`.
pub const BENCH_SLOT: &str = "BN";

/// League identity read alongside the roster settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueSummary {
    pub league_key: Option<String>,
    pub name: Option<String>,
    pub current_week: Option<u16>,
    pub scoring_type: Option<String>,
}
