use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::ClientError;
use crate::observer::Observer;
use crate::satellite::Satellite;

use super::types::PassPrediction;

/// Fetch seam for pass predictions.
pub trait PassSource: Send + Sync + 'static {
    fn visual_passes(
        &self,
        satellite: Satellite,
        observer: Observer,
    ) -> impl Future<Output = Result<Vec<PassPrediction>, ClientError>> + Send;
}

/// One-shot pass retrieval with an observable in-progress flag. Passes are
/// fetched per navigation, never polled.
pub struct PassPredictor<S> {
    source: Arc<S>,
    computing: Arc<AtomicBool>,
}

impl<S: PassSource> PassPredictor<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            computing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True for the duration of a request, false on completion whether it
    /// succeeded or failed. Callers drive a progress indicator off this.
    pub fn is_computing(&self) -> bool {
        self.computing.load(Ordering::SeqCst)
    }

    /// Retrieve upcoming visibility windows in server order. Failures are
    /// logged and yield an empty list; no alert surfaces from here.
    pub async fn get_passes(
        &self,
        satellite: Satellite,
        observer: Observer,
    ) -> Vec<PassPrediction> {
        let _guard = ComputingGuard::hold(&self.computing);
        match self.source.visual_passes(satellite, observer).await {
            Ok(passes) => passes,
            Err(err) => {
                log::warn!("{} pass fetch failed: {}", satellite, err);
                Vec::new()
            }
        }
    }
}

/// Clears the flag on every exit path, including early returns and panics.
struct ComputingGuard {
    flag: Arc<AtomicBool>,
}

impl ComputingGuard {
    fn hold(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag: flag.clone() }
    }
}

impl Drop for ComputingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
