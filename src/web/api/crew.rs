use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::client::CrewPerson;
use crate::crew::country_display;
use crate::web::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CrewMemberView {
    pub name: String,
    pub country: String,
    /// Flag emoji when the table knows the spelling, uppercased name
    /// otherwise.
    pub country_display: String,
    pub title: String,
    pub location: String,
    pub launchdate: String,
    pub launchvehicle: String,
    pub mission: String,
    pub expedition: String,
    pub bio: String,
    pub biolink: String,
    pub biophoto: String,
    pub twitter: String,
}

impl CrewMemberView {
    fn from_person(person: CrewPerson) -> Self {
        Self {
            country_display: country_display(&person.country),
            name: person.name,
            country: person.country,
            title: person.title,
            location: person.location,
            launchdate: person.launchdate,
            launchvehicle: person.launchvehicle,
            mission: person.mission,
            expedition: person.expedition,
            bio: person.bio,
            biolink: person.biolink,
            biophoto: person.biophoto,
            twitter: person.twitter,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CrewRosterResponse {
    pub number: u32,
    pub people: Vec<CrewMemberView>,
    /// Set when the latest fetch failed; clients show a dismissible alert
    /// and keep rendering the stale roster.
    pub last_error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/api/crew",
    responses(
        (status = 200, description = "Current crew roster with error flag", body = CrewRosterResponse)
    ),
    tag = "crew"
)]
pub async fn roster(State(state): State<AppState>) -> Json<CrewRosterResponse> {
    let status = state.crew.lock().await.status();
    Json(CrewRosterResponse {
        number: status.number,
        people: status
            .people
            .into_iter()
            .map(CrewMemberView::from_person)
            .collect(),
        last_error: status.last_error,
        fetched_at: status.fetched_at,
    })
}
