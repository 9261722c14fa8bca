mod api;
mod error;
mod types;

pub use api::{TelemetryClient, PASS_ALTITUDE_M, PASS_DAYS, PASS_MIN_SECONDS, POSITION_COUNT};
pub use error::ClientError;
pub use types::{CrewEnvelope, CrewPerson, PassEnvelope, PositionEnvelope, RawPass, RawPosition};
