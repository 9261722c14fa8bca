use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::client::ClientError;
use crate::observer::Observer;
use crate::satellite::Satellite;

use super::sample::PositionSample;
use super::state::{Heading, TrackState};

/// Fetch seam for the polling worker. Implemented by the live REST client
/// and by scripted sources in tests.
pub trait PositionSource: Send + Sync + 'static {
    fn current_position(
        &self,
        satellite: Satellite,
        observer: Observer,
    ) -> impl Future<Output = Result<PositionSample, ClientError>> + Send;
}

/// Immutable view of a tracker's state, published on every successful fetch
/// and on reset. Consumers read the latest value or subscribe to the stream.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TrackSnapshot {
    pub satellite: Satellite,
    pub sample: Option<PositionSample>,
    pub heading: Option<Heading>,
    pub samples: u64,
    pub generation: u64,
}

impl TrackSnapshot {
    fn empty(satellite: Satellite, generation: u64) -> Self {
        Self {
            satellite,
            sample: None,
            heading: None,
            samples: 0,
            generation,
        }
    }

    fn from_state(satellite: Satellite, state: &TrackState, generation: u64) -> Self {
        Self {
            satellite,
            sample: state.last_sample().cloned(),
            heading: state.heading(),
            samples: state.samples(),
            generation,
        }
    }
}

struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Live-updating best-known position for one satellite.
///
/// One worker task owns the mutable state; everything else observes it
/// through watch-channel snapshots. Fetch failures are dropped silently and
/// the stale sample stands until the next tick self-heals.
pub struct PositionTracker<S> {
    satellite: Satellite,
    observer: Observer,
    poll_interval: Duration,
    source: Arc<S>,
    generation: Arc<AtomicU64>,
    snapshot_tx: Arc<watch::Sender<TrackSnapshot>>,
    worker: Option<WorkerHandle>,
}

impl<S: PositionSource> PositionTracker<S> {
    pub fn new(
        satellite: Satellite,
        observer: Observer,
        poll_interval: Duration,
        source: Arc<S>,
    ) -> Self {
        let (snapshot_tx, _) = watch::channel(TrackSnapshot::empty(satellite, 0));
        Self {
            satellite,
            observer,
            poll_interval,
            source,
            generation: Arc::new(AtomicU64::new(0)),
            snapshot_tx: Arc::new(snapshot_tx),
            worker: None,
        }
    }

    pub fn satellite(&self) -> Satellite {
        self.satellite
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Begin periodic polling. Calling while already running is a no-op;
    /// a second concurrent timer is never created.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(run_poll_loop(
            self.satellite,
            self.observer,
            self.poll_interval,
            self.source.clone(),
            self.generation.clone(),
            self.snapshot_tx.clone(),
            stop_rx,
        ));
        self.worker = Some(WorkerHandle { stop_tx, join });
        log::info!("{} tracker started", self.satellite);
    }

    /// Cancel polling. Safe when not running. An in-flight request is not
    /// interrupted; the worker drains after it completes.
    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            let _ = worker.join.await;
            log::info!("{} tracker stopped", self.satellite);
        }
    }

    /// Discard accumulated heading history and republish an empty snapshot.
    /// A response already in flight when this is called is discarded on
    /// arrival instead of resurrecting the cleared state.
    pub fn reset(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.snapshot_tx
            .send_replace(TrackSnapshot::empty(self.satellite, generation));
        log::info!("{} tracker reset", self.satellite);
    }

    /// Most recent successfully decoded sample, if any fetch has succeeded.
    pub fn current_sample(&self) -> Option<PositionSample> {
        self.snapshot_tx.borrow().sample.clone()
    }

    pub fn snapshot(&self) -> TrackSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TrackSnapshot> {
        self.snapshot_tx.subscribe()
    }
}

async fn run_poll_loop<S: PositionSource>(
    satellite: Satellite,
    observer: Observer,
    poll_interval: Duration,
    source: Arc<S>,
    generation: Arc<AtomicU64>,
    snapshot_tx: Arc<watch::Sender<TrackSnapshot>>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut state = TrackState::default();
    let mut state_generation = generation.load(Ordering::SeqCst);

    loop {
        tokio::select! {
            _ = &mut stop_rx => return,
            _ = ticker.tick() => {}
        }

        let started_generation = generation.load(Ordering::SeqCst);
        if started_generation != state_generation {
            state = TrackState::default();
            state_generation = started_generation;
        }

        // The fetch is awaited inline, so at most one request per tracker
        // is ever in flight.
        match source.current_position(satellite, observer).await {
            Ok(sample) => {
                if generation.load(Ordering::SeqCst) != started_generation {
                    log::debug!("{} position response discarded after reset", satellite);
                    continue;
                }
                state.apply(sample);
                snapshot_tx.send_replace(TrackSnapshot::from_state(
                    satellite,
                    &state,
                    state_generation,
                ));
            }
            Err(err) => {
                // Best effort: keep the stale sample, retry next tick.
                log::debug!("{} position fetch failed: {}", satellite, err);
            }
        }
    }
}
