use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/press", post(handlers::press_form))
        .route("/api/tracker", get(handlers::get_tracker))
        .route("/api/press", post(handlers::press))
        .route("/api/trackers", post(handlers::create_tracker))
        .route("/api/tracker/switch", post(handlers::switch_tracker))
        .route("/api/tracker/delete", post(handlers::delete_tracker))
        .route("/api/history/clear", post(handlers::clear_history))
        .route("/api/history/more", post(handlers::show_more))
        .route("/api/history/less", post(handlers::show_less))
        .with_state(state)
}
