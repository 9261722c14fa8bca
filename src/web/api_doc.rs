use utoipa::OpenApi;

use super::api::crew::{CrewMemberView, CrewRosterResponse};
use super::api::error::ErrorResponse;
use super::api::passes::{ComputingResponse, PassListResponse, RatedPass};
use super::api::tracker::TrackerRunState;
use super::api::globe::SatelliteDescriptor;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::tracker::snapshot,
        super::api::tracker::start,
        super::api::tracker::stop,
        super::api::tracker::reset,
        super::api::passes::computing,
        super::api::passes::passes,
        super::api::crew::roster,
        super::api::globe::satellites,
        super::api::globe::subsolar,
        super::api::globe::timeline,
        super::api::globe::timeline_placeholder,
        super::api::globe::timeline_snapshot,
    ),
    components(
        schemas(
            ErrorResponse,
            TrackerRunState,
            RatedPass,
            PassListResponse,
            ComputingResponse,
            CrewMemberView,
            CrewRosterResponse,
            SatelliteDescriptor,
            crate::satellite::Satellite,
            crate::observer::Observer,
            crate::tracker::TrackSnapshot,
            crate::tracker::PositionSample,
            crate::tracker::Heading,
            crate::passes::PassPrediction,
            crate::client::CrewPerson,
            crate::subsolar::SubSolarPoint,
            crate::timeline::Timeline,
            crate::timeline::TimelineEntry,
            crate::store::StoredLocation,
        )
    ),
    info(
        title = "Orbitwatch API",
        description = "Live satellite position, pass and crew telemetry",
        version = "0.1.0"
    ),
    tags(
        (name = "tracker", description = "Live position tracking"),
        (name = "passes", description = "Visible pass prediction"),
        (name = "crew", description = "Crew roster"),
        (name = "globe", description = "Globe overlays and widget data")
    )
)]
pub struct ApiDoc;
