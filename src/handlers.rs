use crate::errors::AppError;
use crate::models::{
    AppData, ConfirmRequest, CreateTrackerRequest, SwitchRequest, TrackerSummary,
};
use crate::state::AppState;
use crate::stats::{INITIAL_DISPLAY_COUNT, SHOW_MORE_INCREMENT, build_summary};
use crate::storage::persist_data;
use crate::trackers::{self, Direction, PendingAction, Resolution};
use crate::ui::render_index;
use axum::{
    Json,
    extract::State,
    response::{Html, Redirect},
};
use chrono::Utc;
use tracing::error;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data))
}

pub async fn get_tracker(State(state): State<AppState>) -> Result<Json<TrackerSummary>, AppError> {
    let data = state.data.lock().await;
    Ok(summarize(&state, &data, None).await)
}

pub async fn press(State(state): State<AppState>) -> Result<Json<TrackerSummary>, AppError> {
    Ok(apply_press(&state).await)
}

/// Form fallback so the pace button works without scripting.
pub async fn press_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_press(&state).await;
    Ok(Redirect::to("/"))
}

async fn apply_press(state: &AppState) -> Json<TrackerSummary> {
    let mut data = state.data.lock().await;
    trackers::record_press(&mut data, now_ms());
    let warning = persist_or_warn(state, &data).await;
    summarize(state, &data, warning).await
}

pub async fn create_tracker(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrackerRequest>,
) -> Result<Json<TrackerSummary>, AppError> {
    let name = payload.name.unwrap_or_default();
    let mut data = state.data.lock().await;
    let mut warning = None;
    // An empty name means the user cancelled naming: no-op, no error.
    if trackers::create_tracker(&mut data, &name, now_ms()) {
        reset_displayed(&state).await;
        warning = persist_or_warn(&state, &data).await;
    }
    Ok(summarize(&state, &data, warning).await)
}

pub async fn switch_tracker(
    State(state): State<AppState>,
    Json(payload): Json<SwitchRequest>,
) -> Result<Json<TrackerSummary>, AppError> {
    let direction = Direction::parse(payload.direction.trim())
        .ok_or_else(|| AppError::bad_request("direction must be 'next' or 'prev'"))?;

    let mut data = state.data.lock().await;
    trackers::switch_tracker(&mut data, direction);
    reset_displayed(&state).await;
    let warning = persist_or_warn(&state, &data).await;
    Ok(summarize(&state, &data, warning).await)
}

pub async fn delete_tracker(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmRequest>,
) -> Result<Json<TrackerSummary>, AppError> {
    resolve_destructive(&state, PendingAction::DeleteTracker, payload.confirmed).await
}

pub async fn clear_history(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmRequest>,
) -> Result<Json<TrackerSummary>, AppError> {
    resolve_destructive(&state, PendingAction::ClearHistory, payload.confirmed).await
}

async fn resolve_destructive(
    state: &AppState,
    pending: PendingAction,
    confirmed: bool,
) -> Result<Json<TrackerSummary>, AppError> {
    let mut data = state.data.lock().await;
    match trackers::resolve_confirmation(&mut data, pending, confirmed) {
        Resolution::Applied => {
            reset_displayed(state).await;
            let warning = persist_or_warn(state, &data).await;
            Ok(summarize(state, &data, warning).await)
        }
        Resolution::Declined => Ok(summarize(state, &data, None).await),
        Resolution::Rejected(message) => Err(AppError::conflict(message)),
    }
}

pub async fn show_more(State(state): State<AppState>) -> Result<Json<TrackerSummary>, AppError> {
    let data = state.data.lock().await;
    let mut displayed = state.displayed.lock().await;
    *displayed += SHOW_MORE_INCREMENT;
    Ok(Json(build_summary(&data, *displayed)))
}

pub async fn show_less(State(state): State<AppState>) -> Result<Json<TrackerSummary>, AppError> {
    let data = state.data.lock().await;
    let mut displayed = state.displayed.lock().await;
    *displayed = INITIAL_DISPLAY_COUNT;
    Ok(Json(build_summary(&data, *displayed)))
}

async fn reset_displayed(state: &AppState) {
    *state.displayed.lock().await = INITIAL_DISPLAY_COUNT;
}

/// A failed write is logged and reported as a non-fatal notice; the
/// in-memory mutation stands for the rest of the session.
async fn persist_or_warn(state: &AppState, data: &AppData) -> Option<String> {
    match persist_data(&state.data_path, data).await {
        Ok(()) => None,
        Err(err) => {
            error!("failed to persist state: {}", err.message);
            Some("Could not save to disk; changes will be lost on restart.".to_string())
        }
    }
}

async fn summarize(
    state: &AppState,
    data: &AppData,
    storage_warning: Option<String>,
) -> Json<TrackerSummary> {
    let displayed = *state.displayed.lock().await;
    let mut summary = build_summary(data, displayed);
    summary.storage_warning = storage_warning;
    Json(summary)
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
