use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "vn";
const APP_ORG: &str = "RealProfitCalc";
const APP_NAME: &str = "RealProfitCalc";

fn state_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("draft.json"))
}

/// Best effort: a missing or unreadable file just means a fresh start.
pub fn load_persisted_state() -> Option<PersistedState> {
    let path = state_file()?;
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistError> {
    let path = state_file().ok_or(PersistError::NoConfigDir)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("no writable config directory on this platform")]
    NoConfigDir,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
