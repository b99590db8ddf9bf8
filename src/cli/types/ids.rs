//! Key types for Yahoo Fantasy Football resources.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Yahoo league keys.
///
/// Yahoo identifies a league by `<game>.l.<league_id>`, where the game part is
/// either a code like `nfl` or a numeric season game id like `449`.
///
/// # Examples
///
/// ```rust
/// use yahoo_ffl::LeagueKey;
///
/// let league_key: LeagueKey = "nfl.l.123456".parse().unwrap();
/// assert_eq!(league_key.as_str(), "nfl.l.123456");
/// assert_eq!(league_key.league_id(), "123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueKey(String);

impl LeagueKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Game segment (`nfl`, `449`, ...).
    pub fn game(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }

    /// Numeric league id segment.
    pub fn league_id(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or_default()
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueKey {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [game, "l", id] if is_game(game) && is_numeric(id) => Ok(Self(s.to_string())),
            _ => Err(LineupError::InvalidKey {
                kind: "league",
                value: s.to_string(),
            }),
        }
    }
}

/// Type-safe wrapper for Yahoo team keys (`<game>.l.<league_id>.t.<team_id>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamKey(String);

impl TeamKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The league this team belongs to.
    pub fn league_key(&self) -> LeagueKey {
        let end = self.0.rfind(".t.").unwrap_or(self.0.len());
        LeagueKey(self.0[..end].to_string())
    }

    pub fn team_id(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or_default()
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamKey {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [game, "l", league, "t", team]
                if is_game(game) && is_numeric(league) && is_numeric(team) =>
            {
                Ok(Self(s.to_string()))
            }
            _ => Err(LineupError::InvalidKey {
                kind: "team",
                value: s.to_string(),
            }),
        }
    }
}

fn is_game(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
