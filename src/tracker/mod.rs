mod sample;
mod state;
mod tracker;

pub use sample::PositionSample;
pub use state::{Heading, TrackState};
pub use tracker::{PositionSource, PositionTracker, TrackSnapshot};
