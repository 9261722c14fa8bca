use serde::{Deserialize, Serialize};

/// Observer location the position and pass requests are made for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Observer {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            altitude_m: 0.0,
        }
    }
}

impl Observer {
    /// Parse a "lat, lon" coordinate string.
    pub fn from_coordinates(coordinates: &str, altitude_m: Option<f64>) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() < 2 {
            return None;
        }
        let lat = parts[0].parse().ok()?;
        let lon = parts[1].parse().ok()?;
        let alt = altitude_m.unwrap_or(0.0);
        Some(Self {
            latitude_deg: lat,
            longitude_deg: lon,
            altitude_m: alt,
        })
    }

    pub fn with_position(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_string() {
        let obs = Observer::from_coordinates("51.5, -0.12", Some(35.0)).unwrap();
        assert_eq!(obs.latitude_deg, 51.5);
        assert_eq!(obs.longitude_deg, -0.12);
        assert_eq!(obs.altitude_m, 35.0);
    }

    #[test]
    fn missing_longitude_is_rejected() {
        assert!(Observer::from_coordinates("51.5", None).is_none());
        assert!(Observer::from_coordinates("", None).is_none());
    }

    #[test]
    fn altitude_defaults_to_zero() {
        let obs = Observer::from_coordinates("10, 20", None).unwrap();
        assert_eq!(obs.altitude_m, 0.0);
    }
}
