use crate::challenge::repair_loaded_streak;
use crate::errors::AppError;
use crate::models::ChallengeState;
use chrono::{DateTime, Utc};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Load the persisted challenge slot. A missing or malformed file falls back
/// to the initial state; a stale streak is repaired here, once per load.
pub async fn load_state(path: &Path, now: DateTime<Utc>) -> ChallengeState {
    let mut state = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(state) => state,
            Err(err) => {
                error!("failed to parse data file: {err}");
                ChallengeState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ChallengeState::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            ChallengeState::default()
        }
    };
    repair_loaded_streak(&mut state, now);
    state
}

pub async fn persist_state(path: &Path, state: &ChallengeState) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(state).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
