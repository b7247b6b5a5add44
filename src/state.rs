use crate::models::ChallengeState;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub challenge: Arc<Mutex<ChallengeState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, challenge: ChallengeState) -> Self {
        Self {
            data_path,
            challenge: Arc::new(Mutex::new(challenge)),
        }
    }
}
