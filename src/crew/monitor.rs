use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::client::{ClientError, CrewEnvelope, CrewPerson};

/// Fetch seam for the crew roster.
pub trait CrewSource: Send + Sync + 'static {
    fn crew(&self) -> impl Future<Output = Result<CrewEnvelope, ClientError>> + Send;
}

/// Latest known roster plus the user-visible error flag. Unlike position
/// fetches, a crew failure is surfaced: `last_error` stays set until the
/// next successful fetch clears it.
#[derive(Debug, Clone, Default, Serialize, utoipa::ToSchema)]
pub struct CrewStatus {
    pub number: u32,
    pub people: Vec<CrewPerson>,
    pub last_error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Polls the crew roster endpoint on a fixed interval.
pub struct CrewMonitor<S> {
    poll_interval: Duration,
    source: Arc<S>,
    status_tx: Arc<watch::Sender<CrewStatus>>,
    worker: Option<WorkerHandle>,
}

impl<S: CrewSource> CrewMonitor<S> {
    pub fn new(poll_interval: Duration, source: Arc<S>) -> Self {
        let (status_tx, _) = watch::channel(CrewStatus::default());
        Self {
            poll_interval,
            source,
            status_tx: Arc::new(status_tx),
            worker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(run_crew_loop(
            self.poll_interval,
            self.source.clone(),
            self.status_tx.clone(),
            stop_rx,
        ));
        self.worker = Some(WorkerHandle { stop_tx, join });
        log::info!("crew monitor started");
    }

    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            let _ = worker.join.await;
            log::info!("crew monitor stopped");
        }
    }

    pub fn status(&self) -> CrewStatus {
        self.status_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CrewStatus> {
        self.status_tx.subscribe()
    }
}

async fn run_crew_loop<S: CrewSource>(
    poll_interval: Duration,
    source: Arc<S>,
    status_tx: Arc<watch::Sender<CrewStatus>>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = &mut stop_rx => return,
            _ = ticker.tick() => {}
        }

        match source.crew().await {
            Ok(envelope) => {
                status_tx.send_replace(CrewStatus {
                    number: envelope.number,
                    people: envelope.people,
                    last_error: None,
                    fetched_at: Some(Utc::now()),
                });
            }
            Err(err) => {
                log::warn!("crew fetch failed: {}", err);
                // Keep the stale roster; flag the failure for the UI.
                status_tx.send_modify(|status| {
                    status.last_error = Some(err.to_string());
                });
            }
        }
    }
}
