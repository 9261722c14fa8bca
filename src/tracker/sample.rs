use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::{ClientError, RawPosition};

/// One telemetry reading. Consumed as the current/previous pair only;
/// nothing older is retained.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct PositionSample {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: f64,
    pub azimuth: f64,
    pub elevation: f64,
    pub eclipsed: bool,
    pub timestamp: DateTime<Utc>,
}

impl PositionSample {
    pub fn from_raw(raw: &RawPosition) -> Result<Self, ClientError> {
        let timestamp = DateTime::from_timestamp(raw.timestamp, 0)
            .ok_or(ClientError::BadTimestamp(raw.timestamp))?;
        Ok(Self {
            latitude: raw.satlatitude,
            longitude: raw.satlongitude,
            altitude_km: raw.sataltitude,
            azimuth: raw.azimuth,
            elevation: raw.elevation,
            eclipsed: raw.eclipsed,
            timestamp,
        })
    }
}
