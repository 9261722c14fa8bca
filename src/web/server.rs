use axum::{routing::get, routing::post, Router};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::client::TelemetryClient;
use crate::config::Config;
use crate::crew::CrewMonitor;
use crate::observer::Observer;
use crate::passes::PassPredictor;
use crate::satellite::Satellite;
use crate::store::{LocationStore, StoredLocation};
use crate::tracker::PositionTracker;

use super::api::crew as crew_handlers;
use super::api::globe as globe_handlers;
use super::api::passes as pass_handlers;
use super::api::tracker as tracker_handlers;
use super::api_doc::ApiDoc;

pub type LiveTracker = PositionTracker<TelemetryClient>;

#[derive(Clone)]
pub struct AppState {
    pub observer: Observer,
    pub trackers: Arc<HashMap<Satellite, Mutex<LiveTracker>>>,
    pub crew: Arc<Mutex<CrewMonitor<TelemetryClient>>>,
    pub predictor: Arc<PassPredictor<TelemetryClient>>,
    pub store: Arc<LocationStore>,
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    let observer = config
        .observer()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let client = Arc::new(
        TelemetryClient::new(&config.api)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    let store = LocationStore::new(config.store.location_file.clone());
    // This process is the single writer of the shared location; persist the
    // configured observer so widget-style consumers can read it.
    if let Err(e) = store.save(&StoredLocation {
        latitude: observer.latitude_deg,
        longitude: observer.longitude_deg,
        updated_at: chrono::Utc::now(),
    }) {
        log::warn!("failed to persist observer location: {}", e);
    }

    let mut trackers = HashMap::new();
    for satellite in Satellite::tracked() {
        let mut tracker = PositionTracker::new(
            satellite,
            observer,
            config.tracking.position_interval,
            client.clone(),
        );
        tracker.start();
        trackers.insert(satellite, Mutex::new(tracker));
    }

    let mut crew = CrewMonitor::new(config.tracking.crew_interval, client.clone());
    crew.start();

    let state = AppState {
        observer,
        trackers: Arc::new(trackers),
        crew: Arc::new(Mutex::new(crew)),
        predictor: Arc::new(PassPredictor::new(client)),
        store: Arc::new(store),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Globe endpoints
        .route("/api/satellites", get(globe_handlers::satellites))
        .route("/api/subsolar", get(globe_handlers::subsolar))
        .route("/api/timeline", get(globe_handlers::timeline))
        .route(
            "/api/timeline/placeholder",
            get(globe_handlers::timeline_placeholder),
        )
        .route(
            "/api/timeline/snapshot",
            get(globe_handlers::timeline_snapshot),
        )
        // Tracker endpoints
        .route(
            "/api/tracker/{satellite}/snapshot",
            get(tracker_handlers::snapshot),
        )
        .route(
            "/api/tracker/{satellite}/start",
            post(tracker_handlers::start),
        )
        .route(
            "/api/tracker/{satellite}/stop",
            post(tracker_handlers::stop),
        )
        .route(
            "/api/tracker/{satellite}/reset",
            post(tracker_handlers::reset),
        )
        // Pass and crew endpoints
        .route("/api/passes/computing", get(pass_handlers::computing))
        .route("/api/passes/{satellite}", get(pass_handlers::passes))
        .route("/api/crew", get(crew_handlers::roster))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
