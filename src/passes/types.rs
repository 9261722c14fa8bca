use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::{ClientError, RawPass};

/// A single predicted visibility window. Immutable once constructed;
/// returned in the order the server provides them.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct PassPrediction {
    pub start_az: f64,
    pub start_az_compass: String,
    pub start_el: f64,
    pub start_utc: DateTime<Utc>,
    pub max_az: f64,
    pub max_az_compass: String,
    pub max_el: f64,
    pub max_utc: DateTime<Utc>,
    pub end_az: f64,
    pub end_az_compass: String,
    pub end_el: f64,
    pub end_utc: DateTime<Utc>,
    /// Visual magnitude; `NO_MAGNITUDE` when the server has no estimate.
    pub magnitude: f64,
    pub duration_seconds: i64,
}

impl PassPrediction {
    pub fn from_raw(raw: &RawPass) -> Result<Self, ClientError> {
        Ok(Self {
            start_az: raw.start_az,
            start_az_compass: raw.start_az_compass.clone(),
            start_el: raw.start_el,
            start_utc: epoch(raw.start_utc)?,
            max_az: raw.max_az,
            max_az_compass: raw.max_az_compass.clone(),
            max_el: raw.max_el,
            max_utc: epoch(raw.max_utc)?,
            end_az: raw.end_az,
            end_az_compass: raw.end_az_compass.clone(),
            end_el: raw.end_el,
            end_utc: epoch(raw.end_utc)?,
            magnitude: raw.mag,
            duration_seconds: raw.duration,
        })
    }
}

fn epoch(seconds: i64) -> Result<DateTime<Utc>, ClientError> {
    DateTime::from_timestamp(seconds, 0).ok_or(ClientError::BadTimestamp(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_raw_pass() {
        let raw = RawPass {
            start_az: 291.2,
            start_az_compass: "WNW".into(),
            start_el: 0.0,
            start_utc: 1_700_000_000,
            max_az: 15.7,
            max_az_compass: "NNE".into(),
            max_el: 82.4,
            max_utc: 1_700_000_300,
            end_az: 110.1,
            end_az_compass: "ESE".into(),
            end_el: 0.0,
            end_utc: 1_700_000_600,
            mag: -2.6,
            duration: 600,
        };
        let pass = PassPrediction::from_raw(&raw).unwrap();
        assert_eq!(pass.start_az_compass, "WNW");
        assert_eq!(pass.magnitude, -2.6);
        assert_eq!(pass.duration_seconds, 600);
        assert_eq!(
            (pass.end_utc - pass.start_utc).num_seconds(),
            600
        );
    }
}
