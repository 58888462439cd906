use crate::models::{AppData, Tracker};

pub const LAST_TRACKER_MESSAGE: &str = "You cannot delete the last tracker.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "next" => Some(Self::Next),
            "prev" => Some(Self::Prev),
            _ => None,
        }
    }
}

/// A destructive action awaiting the user's confirmation. The
/// decision point is a separate step so declining is an ordinary
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    ClearHistory,
    DeleteTracker,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Declined,
    Rejected(&'static str),
}

pub fn resolve_confirmation(
    data: &mut AppData,
    pending: PendingAction,
    accepted: bool,
) -> Resolution {
    if !accepted {
        return Resolution::Declined;
    }
    match pending {
        PendingAction::ClearHistory => {
            clear_history(data);
            Resolution::Applied
        }
        PendingAction::DeleteTracker => match delete_tracker(data) {
            Ok(()) => Resolution::Applied,
            Err(message) => Resolution::Rejected(message),
        },
    }
}

/// Appends `now_ms` to the active tracker's press sequence. With no
/// active tracker there is nothing to record and the call is a no-op.
pub fn record_press(data: &mut AppData, now_ms: i64) {
    if let Some(tracker) = data.active_tracker_mut() {
        tracker.press_times.push(now_ms);
    }
}

/// Inserts a fresh tracker and makes it active. An empty or
/// whitespace-only name means the user cancelled naming, so nothing
/// changes. Returns whether a tracker was created.
pub fn create_tracker(data: &mut AppData, name: &str, now_ms: i64) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    let id = data.fresh_tracker_id(now_ms);
    data.trackers.insert(id.clone(), Tracker::named(name));
    data.active_tracker_id = Some(id);
    true
}

/// Removes the active tracker. The replacement is the tracker at the
/// same ordinal position of the remaining insertion-ordered list, or
/// the last one when the removed tracker was last, so the UI cursor
/// stays put instead of jumping.
pub fn delete_tracker(data: &mut AppData) -> Result<(), &'static str> {
    if data.trackers.len() <= 1 {
        return Err(LAST_TRACKER_MESSAGE);
    }
    let Some(active) = data.active_tracker_id.clone() else {
        return Ok(());
    };
    let index = data
        .trackers
        .keys()
        .position(|id| *id == active)
        .unwrap_or(0);
    data.trackers.remove(&active);

    let replacement = data
        .trackers
        .keys()
        .nth(index)
        .or_else(|| data.trackers.keys().last())
        .cloned();
    data.active_tracker_id = replacement;
    Ok(())
}

/// Moves the active pointer cyclically through the insertion-ordered
/// id list, wrapping at either end.
pub fn switch_tracker(data: &mut AppData, direction: Direction) {
    let ids: Vec<String> = data.trackers.keys().cloned().collect();
    if ids.is_empty() {
        return;
    }
    let current = data
        .active_tracker_id
        .as_ref()
        .and_then(|active| ids.iter().position(|id| id == active))
        .unwrap_or(0);
    let next = match direction {
        Direction::Next => (current + 1) % ids.len(),
        Direction::Prev => (current + ids.len() - 1) % ids.len(),
    };
    data.active_tracker_id = ids.into_iter().nth(next);
}

/// Empties the active tracker's press sequence.
pub fn clear_history(data: &mut AppData) {
    if let Some(tracker) = data.active_tracker_mut() {
        tracker.press_times.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with(names: &[&str]) -> AppData {
        let mut data = AppData::default();
        for (index, name) in names.iter().enumerate() {
            data.trackers
                .insert(format!("tracker-{index}"), Tracker::named(*name));
        }
        data.active_tracker_id = data.trackers.keys().next().cloned();
        data
    }

    fn activate(data: &mut AppData, name: &str) {
        let id = data
            .trackers
            .iter()
            .find(|(_, tracker)| tracker.name == name)
            .map(|(id, _)| id.clone())
            .expect("tracker not found");
        data.active_tracker_id = Some(id);
    }

    fn active_name(data: &AppData) -> &str {
        data.active_tracker().expect("no active tracker").name.as_str()
    }

    #[test]
    fn record_press_appends_to_active_tracker() {
        let mut data = data_with(&["A"]);
        record_press(&mut data, 1_000);
        record_press(&mut data, 2_000);
        assert_eq!(data.active_tracker().unwrap().press_times, vec![1_000, 2_000]);
    }

    #[test]
    fn create_tracker_inserts_and_activates() {
        let mut data = data_with(&["A"]);
        assert!(create_tracker(&mut data, "Coffee", 5_000));
        assert_eq!(data.trackers.len(), 2);
        assert_eq!(active_name(&data), "Coffee");
        assert!(data.active_tracker().unwrap().press_times.is_empty());
    }

    #[test]
    fn create_tracker_rejects_empty_name() {
        let mut data = data_with(&["A"]);
        let before = data.active_tracker_id.clone();
        assert!(!create_tracker(&mut data, "", 5_000));
        assert!(!create_tracker(&mut data, "   ", 5_000));
        assert_eq!(data.trackers.len(), 1);
        assert_eq!(data.active_tracker_id, before);
    }

    #[test]
    fn create_tracker_bumps_colliding_ids() {
        let mut data = AppData::default();
        assert!(create_tracker(&mut data, "First", 7_000));
        assert!(create_tracker(&mut data, "Second", 7_000));
        assert_eq!(data.trackers.len(), 2);
    }

    #[test]
    fn delete_sole_tracker_is_rejected() {
        let mut data = data_with(&["A"]);
        let before = data.active_tracker_id.clone();
        assert_eq!(delete_tracker(&mut data), Err(LAST_TRACKER_MESSAGE));
        assert_eq!(data.trackers.len(), 1);
        assert_eq!(data.active_tracker_id, before);
    }

    #[test]
    fn delete_keeps_ordinal_position() {
        let mut data = data_with(&["A", "B", "C", "D"]);
        activate(&mut data, "C");
        delete_tracker(&mut data).unwrap();
        assert_eq!(data.trackers.len(), 3);
        assert_eq!(active_name(&data), "D");
    }

    #[test]
    fn delete_last_position_falls_back_to_new_last() {
        let mut data = data_with(&["A", "B", "C", "D"]);
        activate(&mut data, "D");
        delete_tracker(&mut data).unwrap();
        assert_eq!(active_name(&data), "C");
    }

    #[test]
    fn switch_next_wraps_to_first() {
        let mut data = data_with(&["A", "B", "C"]);
        activate(&mut data, "C");
        switch_tracker(&mut data, Direction::Next);
        assert_eq!(active_name(&data), "A");
    }

    #[test]
    fn switch_prev_wraps_to_last() {
        let mut data = data_with(&["A", "B", "C"]);
        switch_tracker(&mut data, Direction::Prev);
        assert_eq!(active_name(&data), "C");
    }

    #[test]
    fn clear_history_empties_active_sequence_only() {
        let mut data = data_with(&["A", "B"]);
        record_press(&mut data, 1_000);
        activate(&mut data, "B");
        record_press(&mut data, 2_000);
        clear_history(&mut data);
        assert!(data.active_tracker().unwrap().press_times.is_empty());
        activate(&mut data, "A");
        assert_eq!(data.active_tracker().unwrap().press_times, vec![1_000]);
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let mut data = data_with(&["A", "B"]);
        record_press(&mut data, 1_000);
        let snapshot = data.active_tracker_id.clone();

        let outcome = resolve_confirmation(&mut data, PendingAction::DeleteTracker, false);
        assert_eq!(outcome, Resolution::Declined);
        assert_eq!(data.trackers.len(), 2);
        assert_eq!(data.active_tracker_id, snapshot);

        let outcome = resolve_confirmation(&mut data, PendingAction::ClearHistory, false);
        assert_eq!(outcome, Resolution::Declined);
        assert_eq!(data.active_tracker().unwrap().press_times, vec![1_000]);
    }

    #[test]
    fn accepted_confirmation_applies_clear() {
        let mut data = data_with(&["A"]);
        record_press(&mut data, 1_000);
        let outcome = resolve_confirmation(&mut data, PendingAction::ClearHistory, true);
        assert_eq!(outcome, Resolution::Applied);
        assert!(data.active_tracker().unwrap().press_times.is_empty());
    }

    #[test]
    fn accepted_delete_of_sole_tracker_is_rejected() {
        let mut data = data_with(&["A"]);
        let outcome = resolve_confirmation(&mut data, PendingAction::DeleteTracker, true);
        assert_eq!(outcome, Resolution::Rejected(LAST_TRACKER_MESSAGE));
        assert_eq!(data.trackers.len(), 1);
    }

    #[test]
    fn direction_parse_rejects_unknown_values() {
        assert_eq!(Direction::parse("next"), Some(Direction::Next));
        assert_eq!(Direction::parse("prev"), Some(Direction::Prev));
        assert_eq!(Direction::parse("sideways"), None);
    }
}
