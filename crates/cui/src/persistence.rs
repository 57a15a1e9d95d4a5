use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ROSTER_SCHEMA_VERSION: u32 = 1;

/// The player roster is the only state that survives restarts. It is an
/// opaque list to the deck core; no validation or deduplication here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRoster {
    pub version: u32,
    pub players: Vec<String>,
}

pub fn default_roster_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("TABLETALK_PLAYERS") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".tabletalk_players.json"))
}

pub fn save_roster(players: &[String], path: &Path) -> Result<(), String> {
    let payload = SavedRoster {
        version: ROSTER_SCHEMA_VERSION,
        players: players.to_vec(),
    };
    let body = serde_json::to_string_pretty(&payload).map_err(|err| err.to_string())?;
    fs::write(path, body).map_err(|err| err.to_string())
}

pub fn load_roster(path: &Path) -> Result<Vec<String>, String> {
    let body = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let payload: SavedRoster = serde_json::from_str(&body).map_err(|err| err.to_string())?;
    if payload.version != ROSTER_SCHEMA_VERSION {
        return Err(format!(
            "unsupported roster version {} (expected {})",
            payload.version, ROSTER_SCHEMA_VERSION
        ));
    }
    Ok(payload.players)
}
