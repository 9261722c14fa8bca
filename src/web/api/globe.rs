use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::satellite::Satellite;
use crate::subsolar::{subsolar_point, SubSolarPoint};
use crate::timeline::{self, Timeline, TimelineEntry};
use crate::web::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SatelliteDescriptor {
    pub satellite: Satellite,
    pub norad_id: u32,
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/satellites",
    responses(
        (status = 200, description = "Satellites with live trackers", body = [SatelliteDescriptor])
    ),
    tag = "globe"
)]
pub async fn satellites() -> Json<Vec<SatelliteDescriptor>> {
    Json(
        Satellite::tracked()
            .into_iter()
            .map(|satellite| SatelliteDescriptor {
                satellite,
                norad_id: satellite.norad_id(),
                name: satellite.to_string(),
            })
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/api/subsolar",
    responses(
        (status = 200, description = "Current subsolar point", body = SubSolarPoint)
    ),
    tag = "globe"
)]
pub async fn subsolar() -> Json<SubSolarPoint> {
    Json(subsolar_point(Utc::now()))
}

#[utoipa::path(
    get,
    path = "/api/timeline",
    responses(
        (status = 200, description = "Widget timeline for the stored observer location", body = Timeline)
    ),
    tag = "globe"
)]
pub async fn timeline(State(state): State<AppState>) -> Json<Timeline> {
    Json(timeline::timeline(&state.predictor, &state.store, Utc::now()).await)
}

#[utoipa::path(
    get,
    path = "/api/timeline/placeholder",
    responses(
        (status = 200, description = "Pass-less entry shown while loading", body = TimelineEntry)
    ),
    tag = "globe"
)]
pub async fn timeline_placeholder() -> Json<TimelineEntry> {
    Json(timeline::placeholder(Utc::now()))
}

#[utoipa::path(
    get,
    path = "/api/timeline/snapshot",
    responses(
        (status = 200, description = "Single transient entry for preview contexts", body = TimelineEntry)
    ),
    tag = "globe"
)]
pub async fn timeline_snapshot(State(state): State<AppState>) -> Json<TimelineEntry> {
    Json(timeline::snapshot(&state.predictor, &state.store, Utc::now()).await)
}
