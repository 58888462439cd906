use crate::models::{AppData, AverageBreakdown, TrackerSummary};

pub const INITIAL_DISPLAY_COUNT: usize = 5;
pub const SHOW_MORE_INCREMENT: usize = 10;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Mean elapsed time between consecutive presses, in milliseconds.
/// `None` with fewer than two presses: a display state, not an error.
///
/// The sequence is sorted ascending by construction, so consecutive
/// differences telescope to `(last - first) / (n - 1)`.
pub fn average_interval(press_times: &[i64]) -> Option<f64> {
    let (first, last) = (press_times.first()?, press_times.last()?);
    if press_times.len() < 2 {
        return None;
    }
    Some((last - first) as f64 / (press_times.len() - 1) as f64)
}

pub fn breakdown(average_ms: f64) -> AverageBreakdown {
    // Flooring once up front gives the same result as the chained
    // float floor-divisions; anything below one second is dropped.
    let total = average_ms.floor() as i64;
    AverageBreakdown {
        days: total / MS_PER_DAY,
        hours: total % MS_PER_DAY / MS_PER_HOUR,
        minutes: total % MS_PER_HOUR / MS_PER_MINUTE,
        seconds: total % MS_PER_MINUTE / MS_PER_SECOND,
    }
}

/// Newest-first page of the press history.
pub fn visible_history(press_times: &[i64], displayed_count: usize) -> Vec<i64> {
    press_times
        .iter()
        .rev()
        .take(displayed_count)
        .copied()
        .collect()
}

/// Assembles everything the page renders for the active tracker,
/// including which controls are currently actionable.
pub fn build_summary(data: &AppData, displayed_count: usize) -> TrackerSummary {
    let (name, press_times): (&str, &[i64]) = match data.active_tracker() {
        Some(tracker) => (tracker.name.as_str(), &tracker.press_times),
        None => ("", &[]),
    };

    TrackerSummary {
        tracker_name: name.to_string(),
        tracker_count: data.trackers.len(),
        press_count: press_times.len(),
        average: average_interval(press_times).map(breakdown),
        history: visible_history(press_times, displayed_count),
        displayed_count,
        can_show_more: press_times.len() > displayed_count,
        can_show_less: displayed_count > INITIAL_DISPLAY_COUNT,
        can_clear: !press_times.is_empty(),
        can_delete: data.trackers.len() > 1,
        storage_warning: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tracker;

    fn data_with_presses(press_times: Vec<i64>) -> AppData {
        let mut data = AppData::initial(0);
        if let Some(tracker) = data.active_tracker_mut() {
            tracker.press_times = press_times;
        }
        data
    }

    #[test]
    fn average_needs_at_least_two_presses() {
        assert_eq!(average_interval(&[]), None);
        assert_eq!(average_interval(&[1_000]), None);
    }

    #[test]
    fn average_is_span_over_gap_count() {
        assert_eq!(average_interval(&[0, 1_000, 5_000]), Some(2_500.0));
        assert_eq!(average_interval(&[10, 20]), Some(10.0));
    }

    #[test]
    fn breakdown_splits_units() {
        // 1d 1h 1m 1s plus half a second, which truncates away.
        let avg = 90_061_500.0;
        let parts = breakdown(avg);
        assert_eq!(
            parts,
            AverageBreakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test]
    fn breakdown_recombines_within_one_second() {
        for avg in [0.0, 999.9, 2_500.0, 59_999.0, 86_399_999.5, 90_061_500.0] {
            let parts = breakdown(avg);
            let recombined = parts.days * MS_PER_DAY
                + parts.hours * MS_PER_HOUR
                + parts.minutes * MS_PER_MINUTE
                + parts.seconds * MS_PER_SECOND;
            assert!(recombined as f64 <= avg, "avg {avg}");
            assert!(avg < (recombined + MS_PER_SECOND) as f64, "avg {avg}");
        }
    }

    #[test]
    fn history_is_newest_first_and_capped() {
        let press_times: Vec<i64> = (1..=12).map(|n| n * 100).collect();
        assert_eq!(
            visible_history(&press_times, 5),
            vec![1_200, 1_100, 1_000, 900, 800]
        );
        assert_eq!(visible_history(&press_times, 15).len(), 12);
        assert!(visible_history(&[], 5).is_empty());
    }

    #[test]
    fn pagination_flags_follow_counts() {
        let data = data_with_presses((1..=12).map(|n| n * 100).collect());

        let initial = build_summary(&data, INITIAL_DISPLAY_COUNT);
        assert_eq!(initial.history.len(), 5);
        assert!(initial.can_show_more);
        assert!(!initial.can_show_less);

        let expanded = build_summary(&data, INITIAL_DISPLAY_COUNT + SHOW_MORE_INCREMENT);
        assert_eq!(expanded.history.len(), 12);
        assert!(!expanded.can_show_more);
        assert!(expanded.can_show_less);
    }

    #[test]
    fn summary_reports_control_availability() {
        let mut data = data_with_presses(vec![]);
        let summary = build_summary(&data, INITIAL_DISPLAY_COUNT);
        assert!(!summary.can_clear);
        assert!(!summary.can_delete);
        assert_eq!(summary.average, None);

        data.trackers
            .insert("tracker-extra".to_string(), Tracker::named("Other"));
        if let Some(tracker) = data.active_tracker_mut() {
            tracker.press_times = vec![0, 1_000];
        }
        let summary = build_summary(&data, INITIAL_DISPLAY_COUNT);
        assert!(summary.can_clear);
        assert!(summary.can_delete);
        assert_eq!(summary.tracker_count, 2);
        assert!(summary.average.is_some());
    }

    #[test]
    fn summary_with_no_active_tracker_degrades() {
        let data = AppData::default();
        let summary = build_summary(&data, INITIAL_DISPLAY_COUNT);
        assert_eq!(summary.tracker_name, "");
        assert_eq!(summary.press_count, 0);
        assert_eq!(summary.average, None);
        assert!(summary.history.is_empty());
    }
}
