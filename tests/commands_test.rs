//! Integration tests for command handlers

use serde_json::Value;
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};
use yahoo_ffl::{
    commands::{
        lineup::{handle_lineup, LineupParams},
        lineup_files::{handle_lineup_files, read_json},
    },
    LineupError, ACCESS_TOKEN_ENV_VAR, BASE_URL_ENV_VAR, CACHE_DIR_ENV_VAR, LEAGUE_KEY_ENV_VAR,
};

fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_read_json_fixture() {
    let value = read_json(&fixture_path("league_settings.json")).unwrap();
    assert!(value["fantasy_content"]["league"].is_array());
}

#[test]
fn test_read_json_missing_file() {
    let err = read_json(&fixture_path("missing.json")).unwrap_err();
    assert!(matches!(err, LineupError::Io(_)));
}

#[test]
fn test_lineup_from_files() {
    let result = handle_lineup_files(
        fixture_path("league_settings.json"),
        fixture_path("team_roster.json"),
        true,
    );
    assert!(result.is_ok());
}

#[test]
fn test_lineup_from_files_swapped_payloads_is_parse_error() {
    let err = handle_lineup_files(
        fixture_path("team_roster.json"),
        fixture_path("league_settings.json"),
        false,
    )
    .unwrap_err();
    assert_eq!(err.code(), "parse_error");
}

#[tokio::test]
async fn test_lineup_command_against_mock_yahoo() {
    let server = MockServer::start().await;
    let settings: Value = read_json(&fixture_path("league_settings.json")).unwrap();
    let roster: Value = read_json(&fixture_path("team_roster.json")).unwrap();

    Mock::given(method("GET"))
        .and(path("/league/449.l.424242/settings"))
        .and(header("authorization", "Bearer integration-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&settings))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/team/449.l.424242.t.3/roster;week=6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&roster))
        .expect(1)
        .mount(&server)
        .await;

    let cache_dir = TempDir::new().unwrap();
    std::env::set_var(BASE_URL_ENV_VAR, server.uri());
    std::env::set_var(ACCESS_TOKEN_ENV_VAR, "integration-token");
    std::env::set_var(CACHE_DIR_ENV_VAR, cache_dir.path());
    std::env::remove_var(LEAGUE_KEY_ENV_VAR);

    let result = handle_lineup(LineupParams {
        team_key: Some("449.l.424242.t.3".parse().unwrap()),
        league_key: None,
        week: Some("6".parse().unwrap()),
        refresh: false,
        as_json: true,
        verbose: false,
    })
    .await;

    std::env::remove_var(BASE_URL_ENV_VAR);
    std::env::remove_var(ACCESS_TOKEN_ENV_VAR);
    std::env::remove_var(CACHE_DIR_ENV_VAR);

    assert!(result.is_ok(), "{result:?}");
    assert!(cache_dir
        .path()
        .join("league-settings_449.l.424242.json")
        .exists());
}
