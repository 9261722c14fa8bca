use serde::{Deserialize, Serialize};

/// Envelope returned by the position endpoint. Only `positions[0]` is
/// authoritative; the API contract guarantees at least one entry on success.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionEnvelope {
    #[allow(dead_code)]
    pub info: PositionInfo,
    #[serde(default)]
    pub positions: Vec<RawPosition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionInfo {
    #[serde(default)]
    pub satname: String,
    #[serde(default)]
    pub satid: u32,
    #[serde(default)]
    pub transactionscount: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPosition {
    pub satlatitude: f64,
    pub satlongitude: f64,
    pub sataltitude: f64,
    #[serde(default)]
    pub azimuth: f64,
    #[serde(default)]
    pub elevation: f64,
    pub timestamp: i64,
    #[serde(default)]
    pub eclipsed: bool,
}

/// Envelope returned by the visual pass endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PassEnvelope {
    #[allow(dead_code)]
    pub info: PassInfo,
    #[serde(default)]
    pub passes: Vec<RawPass>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PassInfo {
    #[serde(default)]
    pub satname: String,
    #[serde(default)]
    pub satid: u32,
    #[serde(default)]
    pub passescount: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPass {
    #[serde(rename = "startAz")]
    pub start_az: f64,
    #[serde(rename = "startAzCompass", default)]
    pub start_az_compass: String,
    #[serde(rename = "startEl", default)]
    pub start_el: f64,
    #[serde(rename = "startUTC")]
    pub start_utc: i64,
    #[serde(rename = "maxAz")]
    pub max_az: f64,
    #[serde(rename = "maxAzCompass", default)]
    pub max_az_compass: String,
    #[serde(rename = "maxEl")]
    pub max_el: f64,
    #[serde(rename = "maxUTC")]
    pub max_utc: i64,
    #[serde(rename = "endAz")]
    pub end_az: f64,
    #[serde(rename = "endAzCompass", default)]
    pub end_az_compass: String,
    #[serde(rename = "endEl", default)]
    pub end_el: f64,
    #[serde(rename = "endUTC")]
    pub end_utc: i64,
    pub mag: f64,
    pub duration: i64,
}

/// Envelope returned by the crew endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewEnvelope {
    pub number: u32,
    #[serde(default)]
    pub people: Vec<CrewPerson>,
}

/// One crew member as the roster endpoint reports them. Kept verbatim as
/// the domain type; the web layer derives display fields from it.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CrewPerson {
    pub name: String,
    #[serde(default)]
    pub biophoto: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub launchdate: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub biolink: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub launchvehicle: String,
    #[serde(default)]
    pub expedition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_position_envelope() {
        let json = r#"{
            "info": { "satname": "SPACE STATION", "satid": 25544, "transactionscount": 4 },
            "positions": [
                { "satlatitude": 51.6, "satlongitude": -12.3, "sataltitude": 408.0,
                  "azimuth": 120.5, "elevation": 22.1, "ra": 10.0, "dec": -5.0,
                  "timestamp": 1700000000, "eclipsed": true }
            ]
        }"#;
        let envelope: PositionEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.positions.len(), 1);
        let p = &envelope.positions[0];
        assert_eq!(p.satlatitude, 51.6);
        assert_eq!(p.satlongitude, -12.3);
        assert_eq!(p.sataltitude, 408.0);
        assert!(p.eclipsed);
    }

    #[test]
    fn decodes_pass_envelope() {
        let json = r#"{
            "info": { "satname": "SPACE STATION", "satid": 25544, "passescount": 1 },
            "passes": [
                { "startAz": 291.2, "startAzCompass": "WNW", "startEl": 0.0,
                  "startUTC": 1700000000,
                  "maxAz": 15.7, "maxAzCompass": "NNE", "maxEl": 82.4,
                  "maxUTC": 1700000300,
                  "endAz": 110.1, "endAzCompass": "ESE", "endEl": 0.0,
                  "endUTC": 1700000600,
                  "mag": -2.6, "duration": 600 }
            ]
        }"#;
        let envelope: PassEnvelope = serde_json::from_str(json).unwrap();
        let pass = &envelope.passes[0];
        assert_eq!(pass.start_az_compass, "WNW");
        assert_eq!(pass.mag, -2.6);
        assert_eq!(pass.duration, 600);
    }

    #[test]
    fn decodes_crew_envelope_with_missing_fields() {
        let json = r#"{
            "number": 1,
            "people": [ { "name": "A. Cosmonaut", "country": "Russia", "location": "ISS" } ]
        }"#;
        let envelope: CrewEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.number, 1);
        assert_eq!(envelope.people[0].country, "Russia");
        assert_eq!(envelope.people[0].bio, "");
    }

    #[test]
    fn empty_positions_array_still_decodes() {
        let json = r#"{ "info": { "satname": "HST", "satid": 20580 }, "positions": [] }"#;
        let envelope: PositionEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.positions.is_empty());
    }
}
