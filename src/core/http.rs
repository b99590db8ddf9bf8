//! HTTP utilities for Yahoo Fantasy API communication

use crate::{LineupError, Result, ACCESS_TOKEN_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build request headers carrying the OAuth bearer token.
pub fn auth_header_map(token: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.trim()))?;
    bearer.set_sensitive(true);
    h.insert(AUTHORIZATION, bearer);
    Ok(h)
}

/// Build headers from `YAHOO_ACCESS_TOKEN`.
///
/// Every Yahoo Fantasy resource needs a signed-in user, so a missing token is
/// an error rather than an anonymous request.
pub fn header_map_from_env() -> Result<HeaderMap> {
    match std::env::var(ACCESS_TOKEN_ENV_VAR) {
        Ok(token) if !token.trim().is_empty() => auth_header_map(&token),
        _ => Err(LineupError::MissingAccessToken {
            env_var: ACCESS_TOKEN_ENV_VAR.to_string(),
        }),
    }
}
