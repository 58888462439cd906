use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRACKER_NAME: &str = "My First Pace";

/// A named, independent sequence of recorded press timestamps
/// (epoch milliseconds, non-decreasing by insertion order).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    pub name: String,
    pub press_times: Vec<i64>,
}

impl Tracker {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            press_times: Vec::new(),
        }
    }
}

/// The persisted application state. Serialized field names stay
/// camelCase so blobs written by earlier revisions keep loading.
///
/// Invariants: when `trackers` is non-empty, `active_tracker_id`
/// names an existing key, and the map is never emptied entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub trackers: LinkedHashMap<String, Tracker>,
    pub active_tracker_id: Option<String>,
}

impl AppData {
    /// Default state for a first run: a single empty tracker, active.
    pub fn initial(now_ms: i64) -> Self {
        let id = format!("tracker-{now_ms}");
        let mut trackers = LinkedHashMap::new();
        trackers.insert(id.clone(), Tracker::named(DEFAULT_TRACKER_NAME));
        Self {
            trackers,
            active_tracker_id: Some(id),
        }
    }

    pub fn active_tracker(&self) -> Option<&Tracker> {
        self.active_tracker_id
            .as_ref()
            .and_then(|id| self.trackers.get(id))
    }

    pub fn active_tracker_mut(&mut self) -> Option<&mut Tracker> {
        let id = self.active_tracker_id.clone()?;
        self.trackers.get_mut(&id)
    }

    /// Timestamp-derived id, bumped past any existing key so two
    /// trackers created within the same millisecond stay distinct.
    pub fn fresh_tracker_id(&self, now_ms: i64) -> String {
        let mut millis = now_ms;
        loop {
            let id = format!("tracker-{millis}");
            if !self.trackers.contains_key(&id) {
                return id;
            }
            millis += 1;
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTrackerRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SwitchRequest {
    pub direction: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub confirmed: bool,
}

/// Average interval decomposed for display; the sub-second
/// remainder is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AverageBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Serialize)]
pub struct TrackerSummary {
    pub tracker_name: String,
    pub tracker_count: usize,
    pub press_count: usize,
    pub average: Option<AverageBreakdown>,
    /// Newest-first page of press timestamps (epoch milliseconds).
    pub history: Vec<i64>,
    pub displayed_count: usize,
    pub can_show_more: bool,
    pub can_show_less: bool,
    pub can_clear: bool,
    pub can_delete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_warning: Option<String>,
}
