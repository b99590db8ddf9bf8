//! File cache helpers for provider payloads
//!
//! League settings barely change during a season, so the raw settings payload
//! is kept on disk per league key and reused until `--refresh`.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{LeagueKey, CACHE_DIR_ENV_VAR};


/// Cache root: `$YAHOO_FFL_CACHE_DIR`, else `~/.cache/yahoo-ffl` (platform cache dir).
pub fn cache_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(CACHE_DIR_ENV_VAR).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("yahoo-ffl")
}

/// Path: <cache root>/league-settings_{league_key}.json
pub fn league_settings_path(league_key: &LeagueKey) -> PathBuf {
    cache_root().join(format!("league-settings_{}.json", league_key))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
