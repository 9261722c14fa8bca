use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tokio::sync::Mutex;
use utoipa::ToSchema;

use crate::satellite::Satellite;
use crate::tracker::TrackSnapshot;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::{AppState, LiveTracker};

#[derive(Debug, Serialize, ToSchema)]
pub struct TrackerRunState {
    pub satellite: Satellite,
    pub running: bool,
}

fn lookup(state: &AppState, satellite: Satellite) -> Result<&Mutex<LiveTracker>, ApiError> {
    if satellite == Satellite::None {
        return Err(ApiError::Validation("no satellite selected".into()));
    }
    state.trackers.get(&satellite).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/tracker/{satellite}/snapshot",
    params(("satellite" = Satellite, Path, description = "Tracked satellite")),
    responses(
        (status = 200, description = "Latest track snapshot", body = TrackSnapshot),
        (status = 400, description = "No satellite selected", body = ErrorResponse),
        (status = 404, description = "Unknown tracker", body = ErrorResponse)
    ),
    tag = "tracker"
)]
pub async fn snapshot(
    State(state): State<AppState>,
    Path(satellite): Path<Satellite>,
) -> ApiResult<Json<TrackSnapshot>> {
    let tracker = lookup(&state, satellite)?.lock().await;
    Ok(Json(tracker.snapshot()))
}

#[utoipa::path(
    post,
    path = "/api/tracker/{satellite}/start",
    params(("satellite" = Satellite, Path, description = "Tracked satellite")),
    responses(
        (status = 200, description = "Tracker running", body = TrackerRunState),
        (status = 404, description = "Unknown tracker", body = ErrorResponse)
    ),
    tag = "tracker"
)]
pub async fn start(
    State(state): State<AppState>,
    Path(satellite): Path<Satellite>,
) -> ApiResult<Json<TrackerRunState>> {
    let mut tracker = lookup(&state, satellite)?.lock().await;
    tracker.start();
    Ok(Json(TrackerRunState {
        satellite,
        running: tracker.is_running(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/tracker/{satellite}/stop",
    params(("satellite" = Satellite, Path, description = "Tracked satellite")),
    responses(
        (status = 200, description = "Tracker stopped", body = TrackerRunState),
        (status = 404, description = "Unknown tracker", body = ErrorResponse)
    ),
    tag = "tracker"
)]
pub async fn stop(
    State(state): State<AppState>,
    Path(satellite): Path<Satellite>,
) -> ApiResult<Json<TrackerRunState>> {
    let mut tracker = lookup(&state, satellite)?.lock().await;
    tracker.stop().await;
    Ok(Json(TrackerRunState {
        satellite,
        running: tracker.is_running(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/tracker/{satellite}/reset",
    params(("satellite" = Satellite, Path, description = "Tracked satellite")),
    responses(
        (status = 200, description = "Track state cleared", body = TrackSnapshot),
        (status = 404, description = "Unknown tracker", body = ErrorResponse)
    ),
    tag = "tracker"
)]
pub async fn reset(
    State(state): State<AppState>,
    Path(satellite): Path<Satellite>,
) -> ApiResult<Json<TrackSnapshot>> {
    let tracker = lookup(&state, satellite)?.lock().await;
    tracker.reset();
    Ok(Json(tracker.snapshot()))
}
