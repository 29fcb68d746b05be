pub mod app_state;
pub mod error;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::*;
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/devices", get(list_devices))
        .route("/devices/reset", post(reset_devices))
        .route("/devices/:id", get(get_device).delete(disconnect_device))
        .route("/devices/:id/pause", post(toggle_pause))
        .route("/devices/:id/expand", post(toggle_expanded))
        .route("/devices/:id/log-target", put(set_log_target))
        .route(
            "/devices/:id/calibration",
            get(calibration_progress)
                .post(submit_calibration_step)
                .delete(cancel_calibration),
        )
        .route("/patient", get(get_patient).put(update_patient))
        .route("/patient/conditions/:name", post(toggle_condition))
        .route("/status", get(get_status))
        .route("/status/:metric", get(get_metric_status))
        .route("/charts", get(get_charts))
        .route("/thresholds", get(get_thresholds))
        .with_state(state)
}
