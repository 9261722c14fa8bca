use std::future::Future;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::crew::CrewSource;
use crate::observer::Observer;
use crate::passes::{PassPrediction, PassSource};
use crate::satellite::Satellite;
use crate::tracker::{PositionSample, PositionSource};

use super::error::ClientError;
use super::types::{CrewEnvelope, PassEnvelope, PositionEnvelope};

/// One position record per request; index 0 is authoritative anyway.
pub const POSITION_COUNT: u32 = 1;
/// Fixed pass request parameters.
pub const PASS_ALTITUDE_M: u32 = 0;
pub const PASS_DAYS: u32 = 30;
pub const PASS_MIN_SECONDS: u32 = 300;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared REST client for the position, pass and crew endpoints. One
/// instance (and one connection pool) serves every tracker in the process.
pub struct TelemetryClient {
    http: reqwest::Client,
    positions_endpoint: String,
    passes_endpoint: String,
    crew_endpoint: String,
    api_key: String,
}

impl TelemetryClient {
    pub fn new(api: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            http,
            positions_endpoint: api.positions_endpoint.clone(),
            passes_endpoint: api.passes_endpoint.clone(),
            crew_endpoint: api.crew_endpoint.clone(),
            api_key: api.key.clone(),
        })
    }

    pub async fn fetch_position(
        &self,
        satellite: Satellite,
        observer: Observer,
    ) -> Result<PositionSample, ClientError> {
        let url = position_url(
            &self.positions_endpoint,
            satellite,
            observer,
            POSITION_COUNT,
            &self.api_key,
        )?;
        let envelope: PositionEnvelope = self.get_json(&url).await?;
        let raw = envelope
            .positions
            .first()
            .ok_or(ClientError::EmptyPositions)?;
        PositionSample::from_raw(raw)
    }

    pub async fn fetch_passes(
        &self,
        satellite: Satellite,
        observer: Observer,
    ) -> Result<Vec<PassPrediction>, ClientError> {
        let url = pass_url(&self.passes_endpoint, satellite, observer, &self.api_key)?;
        let envelope: PassEnvelope = self.get_json(&url).await?;
        // Server order is chronological; keep it.
        envelope
            .passes
            .iter()
            .map(PassPrediction::from_raw)
            .collect()
    }

    pub async fn fetch_crew(&self) -> Result<CrewEnvelope, ClientError> {
        self.get_json(&self.crew_endpoint).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

/// Build a position request URL. The upstream API glues the key on after a
/// trailing slash (`/&apiKey=`); that shape is load-bearing and preserved.
fn position_url(
    endpoint: &str,
    satellite: Satellite,
    observer: Observer,
    count: u32,
    key: &str,
) -> Result<String, ClientError> {
    if satellite == Satellite::None {
        return Err(ClientError::NoSatelliteSelected);
    }
    Ok(format!(
        "{}/{}/{}/{}/{}/{}/&apiKey={}",
        endpoint,
        satellite.norad_id(),
        observer.latitude_deg,
        observer.longitude_deg,
        observer.altitude_m,
        count,
        key
    ))
}

fn pass_url(
    endpoint: &str,
    satellite: Satellite,
    observer: Observer,
    key: &str,
) -> Result<String, ClientError> {
    if satellite == Satellite::None {
        return Err(ClientError::NoSatelliteSelected);
    }
    Ok(format!(
        "{}/{}/{}/{}/{}/{}/{}/&apiKey={}",
        endpoint,
        satellite.norad_id(),
        observer.latitude_deg,
        observer.longitude_deg,
        PASS_ALTITUDE_M,
        PASS_DAYS,
        PASS_MIN_SECONDS,
        key
    ))
}

impl PositionSource for TelemetryClient {
    fn current_position(
        &self,
        satellite: Satellite,
        observer: Observer,
    ) -> impl Future<Output = Result<PositionSample, ClientError>> + Send {
        self.fetch_position(satellite, observer)
    }
}

impl PassSource for TelemetryClient {
    fn visual_passes(
        &self,
        satellite: Satellite,
        observer: Observer,
    ) -> impl Future<Output = Result<Vec<PassPrediction>, ClientError>> + Send {
        self.fetch_passes(satellite, observer)
    }
}

impl CrewSource for TelemetryClient {
    fn crew(&self) -> impl Future<Output = Result<CrewEnvelope, ClientError>> + Send {
        self.fetch_crew()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer() -> Observer {
        Observer::with_position(41.702, -76.014)
    }

    #[test]
    fn position_url_preserves_upstream_shape() {
        let url = position_url(
            "https://api.n2yo.com/rest/v1/satellite/positions",
            Satellite::Iss,
            observer(),
            1,
            "KEY",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://api.n2yo.com/rest/v1/satellite/positions/25544/41.702/-76.014/0/1/&apiKey=KEY"
        );
    }

    #[test]
    fn pass_url_uses_fixed_window() {
        let url = pass_url(
            "https://api.n2yo.com/rest/v1/satellite/visualpasses",
            Satellite::Hubble,
            observer(),
            "KEY",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://api.n2yo.com/rest/v1/satellite/visualpasses/20580/41.702/-76.014/0/30/300/&apiKey=KEY"
        );
    }

    #[test]
    fn none_selection_is_rejected() {
        let err = position_url("e", Satellite::None, observer(), 1, "k").unwrap_err();
        assert!(matches!(err, ClientError::NoSatelliteSelected));
        let err = pass_url("e", Satellite::None, observer(), "k").unwrap_err();
        assert!(matches!(err, ClientError::NoSatelliteSelected));
    }
}
