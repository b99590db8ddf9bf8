use std::time::Duration;

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::debug;

use crate::core::header_map_from_env;
use crate::{LeagueKey, Result, TeamKey, Week, BASE_URL_ENV_VAR};


/// Base path for the Yahoo Fantasy Sports v2 API.
pub const YAHOO_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client for the Yahoo Fantasy resources the lineup tool reads.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl YahooClient {
    pub fn new(base_url: impl Into<String>, headers: HeaderMap) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("yahoo-ffl/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            headers,
        })
    }

    /// Client configured from `YAHOO_ACCESS_TOKEN` and `YAHOO_FFL_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| YAHOO_BASE_URL.to_string());
        Self::new(base_url, header_map_from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn league_settings_url(&self, league_key: &LeagueKey) -> String {
        format!("{}/league/{}/settings", self.base_url, league_key)
    }

    /// Roster URL; Yahoo takes the week as a `;week=` matrix parameter.
    pub fn team_roster_url(&self, team_key: &TeamKey, week: Option<Week>) -> String {
        match week {
            Some(week) => format!("{}/team/{}/roster;week={}", self.base_url, team_key, week),
            None => format!("{}/team/{}/roster", self.base_url, team_key),
        }
    }

    /// Raw league settings payload (roster positions live here).
    pub async fn get_league_settings(&self, league_key: &LeagueKey) -> Result<Value> {
        self.get_json(&self.league_settings_url(league_key)).await
    }

    /// Raw team roster payload for a week, or the current week when `None`.
    pub async fn get_team_roster(&self, team_key: &TeamKey, week: Option<Week>) -> Result<Value> {
        self.get_json(&self.team_roster_url(team_key, week)).await
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");

        let v = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .query(&[("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }
}
