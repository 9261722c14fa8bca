use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::observer::Observer;
use crate::passes::{number_of_stars, PassPrediction};
use crate::satellite::Satellite;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PassesQuery {
    /// Observer latitude; falls back to the configured observer.
    pub lat: Option<f64>,
    /// Observer longitude; falls back to the configured observer.
    pub lon: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatedPass {
    pub pass: PassPrediction,
    /// 0-4 stars from the pass magnitude; absent when the server reported
    /// no magnitude.
    pub stars: Option<u8>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PassListResponse {
    pub satellite: Satellite,
    pub observer: Observer,
    pub passes: Vec<RatedPass>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComputingResponse {
    pub is_computing: bool,
}

#[utoipa::path(
    get,
    path = "/api/passes/computing",
    responses(
        (status = 200, description = "Whether a pass request is currently in flight", body = ComputingResponse)
    ),
    tag = "passes"
)]
pub async fn computing(State(state): State<AppState>) -> Json<ComputingResponse> {
    Json(ComputingResponse {
        is_computing: state.predictor.is_computing(),
    })
}

#[utoipa::path(
    get,
    path = "/api/passes/{satellite}",
    params(
        ("satellite" = Satellite, Path, description = "Satellite to predict passes for"),
        PassesQuery
    ),
    responses(
        (status = 200, description = "Upcoming visible passes in server order; empty on upstream failure", body = PassListResponse),
        (status = 400, description = "No satellite selected", body = ErrorResponse)
    ),
    tag = "passes"
)]
pub async fn passes(
    State(state): State<AppState>,
    Path(satellite): Path<Satellite>,
    Query(query): Query<PassesQuery>,
) -> ApiResult<Json<PassListResponse>> {
    if satellite == Satellite::None {
        return Err(ApiError::Validation("no satellite selected".into()));
    }

    let observer = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => Observer::with_position(lat, lon),
        _ => state.observer,
    };

    let passes = state
        .predictor
        .get_passes(satellite, observer)
        .await
        .into_iter()
        .map(|pass| RatedPass {
            stars: number_of_stars(pass.magnitude),
            pass,
        })
        .collect();

    Ok(Json(PassListResponse {
        satellite,
        observer,
        passes,
    }))
}
