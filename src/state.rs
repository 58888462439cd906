use crate::models::AppData;
use crate::stats::INITIAL_DISPLAY_COUNT;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    /// Transient history page size. Never persisted; reset whenever
    /// the active tracker changes or its history is cleared.
    pub displayed: Arc<Mutex<usize>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            displayed: Arc::new(Mutex::new(INITIAL_DISPLAY_COUNT)),
        }
    }
}
