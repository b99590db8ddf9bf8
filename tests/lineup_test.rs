//! End-to-end tests: saved Yahoo payloads through normalizer and optimizer

use serde_json::{json, Value};
use yahoo_ffl::{
    commands::common::build_lineup,
    lineup::{is_eligible, optimize},
    yahoo::{parse_league_slots, parse_roster},
    LeagueSlots, RosteredPlayer,
};

fn fixture(name: &str) -> Value {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn names(players: &[RosteredPlayer]) -> Vec<&str> {
    players.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_fixture_lineup() {
    let (slots, lineup) =
        build_lineup(&fixture("league_settings.json"), &fixture("team_roster.json")).unwrap();

    assert_eq!(slots.total(), 16);
    assert_eq!(
        lineup.starters.slots().collect::<Vec<_>>(),
        vec!["QB", "WR", "RB", "TE", "W/R/T", "K", "DEF"]
    );

    let starters = &lineup.starters;
    assert_eq!(names(starters.get("QB").unwrap()), vec!["Jalen Hurts"]);
    assert_eq!(
        names(starters.get("WR").unwrap()),
        vec!["Garrett Wilson", "DeVonta Smith"]
    );
    assert_eq!(
        names(starters.get("RB").unwrap()),
        vec!["Bijan Robinson", "Kenneth Walker III"]
    );
    assert_eq!(names(starters.get("TE").unwrap()), vec!["Sam LaPorta"]);
    // Ekeler (O) and Kupp (IR) score the same at flex; roster order decides.
    assert_eq!(names(starters.get("W/R/T").unwrap()), vec!["Austin Ekeler"]);
    assert_eq!(names(starters.get("K").unwrap()), vec!["Jake Elliott"]);
    assert_eq!(names(starters.get("DEF").unwrap()), vec!["Philadelphia"]);
    assert_eq!(names(&lineup.bench), vec!["Cooper Kupp"]);

    let recs = &lineup.recommendations;
    assert_eq!(names(&recs.start), vec!["DeVonta Smith"]);
    assert_eq!(names(&recs.sit), vec!["Cooper Kupp"]);
    assert_eq!(
        recs.reasons,
        vec![
            "Start DeVonta Smith at WR (currently BN)".to_string(),
            "Sit Cooper Kupp (currently WR): listed IR".to_string(),
        ]
    );
}

#[test]
fn test_fixture_lineup_json_shape() {
    let (_, lineup) =
        build_lineup(&fixture("league_settings.json"), &fixture("team_roster.json")).unwrap();
    let value = serde_json::to_value(&lineup).unwrap();

    let starter_slots: Vec<&String> = value["starters"].as_object().unwrap().keys().collect();
    assert_eq!(starter_slots.len(), 7);
    assert_eq!(value["starters"]["QB"][0]["playerKey"], "449.p.33389");
    assert_eq!(value["starters"]["QB"][0]["eligiblePositions"], json!(["QB"]));
    assert_eq!(value["bench"][0]["status"], "IR");
    assert_eq!(value["recommendations"]["start"][0]["name"], "DeVonta Smith");
    assert!(value["recommendations"]["reasons"].is_array());
}

#[test]
fn test_every_starter_is_eligible_and_partitioned() {
    let slots = parse_league_slots(&fixture("league_settings.json")).unwrap();
    let roster = parse_roster(&fixture("team_roster.json")).unwrap();
    let lineup = optimize(&slots, &roster);

    let mut seen = 0;
    for (slot, players) in lineup.starters.iter() {
        assert!(players.len() <= *slots.get(slot).unwrap() as usize);
        for p in players {
            assert!(is_eligible(p, slot));
            seen += 1;
        }
    }
    assert_eq!(seen + lineup.bench.len(), roster.len());
}

#[test]
fn test_one_player_per_position_fills_every_slot() {
    let slots: LeagueSlots = vec![("QB", 1), ("RB", 2), ("WR", 2), ("TE", 1), ("K", 1)]
        .into_iter()
        .collect();
    let roster = vec![
        RosteredPlayer::new("1", "Q", &["QB"]),
        RosteredPlayer::new("2", "R1", &["RB"]),
        RosteredPlayer::new("3", "R2", &["RB"]),
        RosteredPlayer::new("4", "W1", &["WR"]),
        RosteredPlayer::new("5", "W2", &["WR"]),
        RosteredPlayer::new("6", "T", &["TE"]),
        RosteredPlayer::new("7", "K", &["K"]),
    ];

    let lineup = optimize(&slots, &roster);

    assert!(lineup.bench.is_empty());
    assert_eq!(lineup.starter_count(), 7);
}

#[test]
fn test_genuinely_empty_roster_yields_empty_lineup() {
    let roster = json!({"fantasy_content": {"team": [
        [{"team_key": "449.l.424242.t.3"}],
        {"roster": {"coverage_type": "week", "week": "6", "0": {"players": {"count": 0}}}}
    ]}});

    let (_, lineup) = build_lineup(&fixture("league_settings.json"), &roster).unwrap();

    assert!(lineup.starters.is_empty());
    assert!(lineup.bench.is_empty());
}

#[test]
fn test_unreadable_roster_is_parse_error() {
    let err = build_lineup(
        &fixture("league_settings.json"),
        &json!({"error": {"lang": "en-us", "description": "Invalid cookie"}}),
    )
    .unwrap_err();

    assert_eq!(err.code(), "parse_error");
    assert!(err.user_message().contains("team"));
}
