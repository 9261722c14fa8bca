mod predictor;
mod quality;
mod types;

pub use predictor::{PassPredictor, PassSource};
pub use quality::{number_of_stars, NO_MAGNITUDE};
pub use types::PassPrediction;
