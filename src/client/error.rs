use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no satellite selected")]
    NoSatelliteSelected,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("empty positions array")]
    EmptyPositions,
    #[error("invalid epoch timestamp {0}")]
    BadTimestamp(i64),
}
