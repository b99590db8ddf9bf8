//! Shared lookup tables: position weights, status penalties and flex unions.

use std::fmt;
use std::str::FromStr;

/// Base fantasy football positions that carry a weight.
///
/// # Examples
///
/// ```rust
/// use yahoo_ffl::lineup::tables::Position;
///
/// let def: Position = "D/ST".parse().unwrap();
/// assert_eq!(def, Position::DEF);
/// assert_eq!(Position::RB.weight(), 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];

    /// Slot value used by the optimizer: RB > WR > QB > TE > K = DEF.
    pub fn weight(self) -> i32 {
        match self {
            Position::RB => 90,
            Position::WR => 85,
            Position::QB => 75,
            Position::TE => 70,
            Position::K => 20,
            Position::DEF => 20,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(format!("Unrecognized player position: {s:?}")),
        }
    }
}

/// Flex slot tokens and the base positions each one accepts.
pub const FLEX_UNIONS: &[(&str, &[Position])] = &[
    ("W/R/T", &[Position::RB, Position::WR, Position::TE]),
    ("Q/W/R/T", &[Position::QB, Position::RB, Position::WR, Position::TE]),
    ("W/R", &[Position::RB, Position::WR]),
];

/// Slot tokens that hold players without starting them.
pub const RESERVE_SLOTS: &[&str] = &["BN", "IR", "IR+"];

/// Members of a flex slot, or `None` when the token is not a flex union.
pub fn flex_union(slot: &str) -> Option<&'static [Position]> {
    FLEX_UNIONS
        .iter()
        .find(|(token, _)| *token == slot)
        .map(|(_, members)| *members)
}

/// Weight for a base position token; `None` for flex or unknown tokens.
pub fn position_weight(token: &str) -> Option<i32> {
    token.parse::<Position>().ok().map(Position::weight)
}

/// Weight of a slot independent of who fills it.
///
/// A flex slot is worth as much as its best member position.
pub fn slot_weight(slot: &str) -> Option<i32> {
    match flex_union(slot) {
        Some(members) => members.iter().map(|p| p.weight()).max(),
        None => position_weight(slot),
    }
}

/// Additive penalty for an injury or availability designation; always <= 0.
pub fn status_penalty(status: Option<&str>) -> i32 {
    let Some(status) = status else {
        return 0;
    };
    match status.trim().to_uppercase().as_str() {
        "O" | "OUT" | "IR" => -100,
        "DL" => -60,
        "D" | "PUP" | "SUSP" => -40,
        "NA" => -20,
        "Q" => -15,
        _ => 0,
    }
}

pub fn is_reserve_slot(slot: &str) -> bool {
    RESERVE_SLOTS.contains(&slot)
}

/// Whether the optimizer knows how to fill this slot token.
pub fn is_known_slot(slot: &str) -> bool {
    position_weight(slot).is_some() || flex_union(slot).is_some() || is_reserve_slot(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_ordering() {
        let rb = Position::RB.weight();
        let wr = Position::WR.weight();
        let qb = Position::QB.weight();
        let te = Position::TE.weight();
        assert!(rb > wr && wr > qb && qb > te);
        assert!(te > Position::K.weight());
        assert_eq!(Position::K.weight(), Position::DEF.weight());
    }

    #[test]
    fn test_position_parsing() {
        assert_eq!("qb".parse::<Position>().unwrap(), Position::QB);
        assert_eq!("DST".parse::<Position>().unwrap(), Position::DEF);
        assert!("W/R/T".parse::<Position>().is_err());
        assert!("BN".parse::<Position>().is_err());
        for p in Position::ALL {
            assert_eq!(p.token().parse::<Position>().unwrap(), p);
        }
    }

    #[test]
    fn test_slot_weight_uses_flex_max() {
        assert_eq!(slot_weight("W/R/T"), Some(90));
        assert_eq!(slot_weight("Q/W/R/T"), Some(90));
        assert_eq!(slot_weight("W/R"), Some(90));
        assert_eq!(slot_weight("TE"), Some(70));
        assert_eq!(slot_weight("BN"), None);
        assert_eq!(slot_weight("OP"), None);
    }

    #[test]
    fn test_status_penalties() {
        assert_eq!(status_penalty(None), 0);
        assert_eq!(status_penalty(Some("O")), -100);
        assert_eq!(status_penalty(Some("OUT")), -100);
        assert_eq!(status_penalty(Some("IR")), -100);
        assert_eq!(status_penalty(Some("DL")), -60);
        assert_eq!(status_penalty(Some("D")), -40);
        assert_eq!(status_penalty(Some("PUP")), -40);
        assert_eq!(status_penalty(Some("SUSP")), -40);
        assert_eq!(status_penalty(Some("NA")), -20);
        assert_eq!(status_penalty(Some("Q")), -15);
        assert_eq!(status_penalty(Some("P")), 0);
        assert_eq!(status_penalty(Some("")), 0);
    }

    #[test]
    fn test_flex_union_membership() {
        let wrt = flex_union("W/R/T").unwrap();
        assert!(wrt.contains(&Position::TE));
        assert!(!wrt.contains(&Position::QB));
        assert!(flex_union("Q/W/R/T").unwrap().contains(&Position::QB));
        assert!(flex_union("RB").is_none());
    }

    #[test]
    fn test_known_slots() {
        assert!(is_known_slot("QB"));
        assert!(is_known_slot("W/R"));
        assert!(is_known_slot("BN"));
        assert!(!is_known_slot("OP"));
        assert!(is_reserve_slot("IR+"));
        assert!(!is_reserve_slot("K"));
    }
}
