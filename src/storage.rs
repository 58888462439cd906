use crate::errors::AppError;
use crate::models::AppData;
use chrono::Utc;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Loads the persisted state. A missing, unreadable, or malformed
/// blob falls back to the default single-tracker state so startup
/// always renders something.
pub async fn load_data(path: &Path) -> AppData {
    let now_ms = Utc::now().timestamp_millis();
    match fs::read(path).await {
        Ok(bytes) => parse_data(&bytes, now_ms),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::initial(now_ms),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::initial(now_ms)
        }
    }
}

fn parse_data(bytes: &[u8], now_ms: i64) -> AppData {
    match serde_json::from_slice::<AppData>(bytes) {
        Ok(data) => repair(data, now_ms),
        // Early revisions persisted a bare array of press timestamps;
        // fold those into a single default-named tracker.
        Err(_) => match serde_json::from_slice::<Vec<i64>>(bytes) {
            Ok(press_times) => {
                let mut data = AppData::initial(now_ms);
                if let Some(tracker) = data.active_tracker_mut() {
                    tracker.press_times = press_times;
                }
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::initial(now_ms)
            }
        },
    }
}

/// Restores the data-model invariants after an untrusted parse: an
/// empty collection becomes the default state, and a dangling or
/// absent active id falls back to the first tracker.
fn repair(mut data: AppData, now_ms: i64) -> AppData {
    if data.trackers.is_empty() {
        return AppData::initial(now_ms);
    }
    let active_exists = data
        .active_tracker_id
        .as_ref()
        .is_some_and(|id| data.trackers.contains_key(id));
    if !active_exists {
        data.active_tracker_id = data.trackers.keys().next().cloned();
    }
    data
}

/// Whole-blob write; the last full write wins.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
