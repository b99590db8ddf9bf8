//! Offline lineup command: run the optimizer on saved Yahoo payloads.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::Result;

use super::common::{build_lineup, print_error_json, print_lineup};

/// Handle the lineup-from-files command
pub fn handle_lineup_files(settings: PathBuf, roster: PathBuf, as_json: bool) -> Result<()> {
    let result = run(&settings, &roster, as_json);
    if let Err(e) = &result {
        if as_json {
            print_error_json(e);
        }
    }
    result
}

fn run(settings: &Path, roster: &Path, as_json: bool) -> Result<()> {
    let settings = read_json(settings)?;
    let roster = read_json(roster)?;

    let (slots, lineup) = build_lineup(&settings, &roster)?;
    print_lineup(&slots, &lineup, as_json)
}

/// Read and parse a saved payload.
pub fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
