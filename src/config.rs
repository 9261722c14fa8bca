use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::observer::Observer;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid observer coordinates: {0}")]
    Coordinates(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub observer: ObserverConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub positions_endpoint: String,
    pub passes_endpoint: String,
    pub crew_endpoint: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObserverConfig {
    pub coordinates: String,
    #[serde(default)]
    pub altitude_m: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    #[serde(
        default = "default_position_interval",
        deserialize_with = "deserialize_interval"
    )]
    pub position_interval: Duration,
    #[serde(
        default = "default_crew_interval",
        deserialize_with = "deserialize_interval"
    )]
    pub crew_interval: Duration,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            position_interval: default_position_interval(),
            crew_interval: default_crew_interval(),
        }
    }
}

fn default_position_interval() -> Duration {
    Duration::from_secs(4)
}

fn default_crew_interval() -> Duration {
    Duration::from_secs(5)
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub location_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn deserialize_interval<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.observer()?;
        Ok(config)
    }

    /// The configured observer, validated against the coordinate string.
    pub fn observer(&self) -> Result<Observer, ConfigError> {
        Observer::from_coordinates(&self.observer.coordinates, Some(self.observer.altitude_m))
            .ok_or_else(|| ConfigError::Coordinates(self.observer.coordinates.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
api:
  positions_endpoint: https://api.n2yo.com/rest/v1/satellite/positions
  passes_endpoint: https://api.n2yo.com/rest/v1/satellite/visualpasses
  crew_endpoint: https://example.org/people-in-space.json
  key: SECRET
observer:
  coordinates: "51.5, -0.12"
  altitude_m: 35
tracking:
  position_interval: 3s
  crew_interval: 5s
store:
  location_file: /tmp/observer.json
web:
  bind: 127.0.0.1:9000
"#;

    #[test]
    fn parses_full_config() {
        let config: Config = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(config.api.key, "SECRET");
        assert_eq!(config.tracking.position_interval, Duration::from_secs(3));
        assert_eq!(config.tracking.crew_interval, Duration::from_secs(5));
        assert_eq!(config.web.bind, "127.0.0.1:9000");
        let obs = config.observer().unwrap();
        assert_eq!(obs.latitude_deg, 51.5);
        assert_eq!(obs.altitude_m, 35.0);
    }

    #[test]
    fn intervals_and_bind_have_defaults() {
        let minimal = r#"
api:
  positions_endpoint: a
  passes_endpoint: b
  crew_endpoint: c
  key: k
observer:
  coordinates: "0.1, 0.2"
store:
  location_file: /tmp/observer.json
"#;
        let config: Config = serde_yaml::from_str(minimal).unwrap();
        assert_eq!(config.tracking.position_interval, Duration::from_secs(4));
        assert_eq!(config.tracking.crew_interval, Duration::from_secs(5));
        assert_eq!(config.web.bind, "0.0.0.0:8080");
    }

    #[test]
    fn rejects_bad_interval() {
        let bad = SAMPLE.replace("3s", "three seconds");
        assert!(serde_yaml::from_str::<Config>(&bad).is_err());
    }
}
