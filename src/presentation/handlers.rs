// HTTP request handlers
use crate::domain::calibration::WeightUnit;
use crate::domain::patient::Patient;
use crate::domain::reading::Metric;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiResult;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ThemeQuery {
    pub dark: Option<bool>,
}

#[derive(Deserialize)]
pub struct CalibrationStepRequest {
    pub step: usize,
    pub weight: f64,
    pub unit: WeightUnit,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogTargetRequest {
    pub log_to: String,
}

async fn respond<T: Serialize>(state: &AppState, headers: &HeaderMap, data: &T) -> ApiResult<Response> {
    let compress = state.compress_responses && accepts_brotli(headers);
    Ok(json_response(data, compress).await?)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn list_devices(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let devices = state.fleet_service.list_devices().await?;
    respond(&state, &headers, &devices).await
}

pub async fn get_device(
    Path(id): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let device = state.fleet_service.get_device(id).await?;
    respond(&state, &headers, &device).await
}

pub async fn toggle_pause(
    Path(id): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let device = state.fleet_service.toggle_pause(id).await?;
    respond(&state, &headers, &device).await
}

pub async fn toggle_expanded(
    Path(id): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let device = state.fleet_service.toggle_expanded(id).await?;
    respond(&state, &headers, &device).await
}

pub async fn set_log_target(
    Path(id): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<LogTargetRequest>,
) -> ApiResult<Response> {
    let device = state.fleet_service.set_log_target(id, request.log_to).await?;
    respond(&state, &headers, &device).await
}

/// Disconnect a device; the remaining devices are re-indexed
pub async fn disconnect_device(
    Path(id): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    state.fleet_service.disconnect(id).await?;
    let devices = state.fleet_service.list_devices().await?;
    respond(&state, &headers, &devices).await
}

pub async fn reset_devices(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let devices = state.fleet_service.reset().await?;
    respond(&state, &headers, &devices).await
}

pub async fn calibration_progress(
    Path(id): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let progress = state.fleet_service.calibration_progress(id).await?;
    respond(&state, &headers, &progress).await
}

pub async fn submit_calibration_step(
    Path(id): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<CalibrationStepRequest>,
) -> ApiResult<Response> {
    let progress = state
        .fleet_service
        .submit_calibration_step(id, request.step, request.weight, request.unit)
        .await?;
    respond(&state, &headers, &progress).await
}

pub async fn cancel_calibration(
    Path(id): Path<usize>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let cancelled = state.fleet_service.cancel_calibration(id).await;
    respond(&state, &headers, &json!({ "cancelled": cancelled })).await
}

pub async fn get_patient(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let patient = state.patient_service.get_patient().await;
    respond(&state, &headers, &patient).await
}

pub async fn update_patient(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(patient): Json<Patient>,
) -> ApiResult<Response> {
    let patient = state.patient_service.update_patient(patient).await?;
    respond(&state, &headers, &patient).await
}

pub async fn toggle_condition(
    Path(condition): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let patient = state.patient_service.toggle_condition(&condition).await?;
    respond(&state, &headers, &patient).await
}

/// Whole-fleet status: device cards, metric tiles and the overall summary
pub async fn get_status(
    Query(query): Query<ThemeQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let dashboard = state.status_service.dashboard(query.dark.unwrap_or(false)).await?;
    respond(&state, &headers, &dashboard).await
}

pub async fn get_metric_status(
    Path(metric): Path<String>,
    Query(query): Query<ThemeQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let metric: Metric = metric.parse()?;
    let list = state
        .status_service
        .metric_list(metric, query.dark.unwrap_or(false))
        .await?;
    respond(&state, &headers, &list).await
}

pub async fn get_charts(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let panel = state.status_service.charts(&chrono::Local::now())?;
    respond(&state, &headers, &panel).await
}

pub async fn get_thresholds(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    respond(&state, &headers, state.status_service.thresholds()).await
}
