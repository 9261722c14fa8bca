use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::observer::Observer;
use crate::passes::{PassPredictor, PassPrediction, PassSource};
use crate::satellite::Satellite;
use crate::store::LocationStore;

/// The widget tracks the station only.
pub const TIMELINE_SATELLITE: Satellite = Satellite::Iss;

/// One widget timeline slot.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TimelineEntry {
    pub date: DateTime<Utc>,
    /// Absent while loading or when no pass could be fetched.
    pub pass: Option<PassPrediction>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    /// Consumers re-request once the last entry's date has passed.
    pub refresh_after: DateTime<Utc>,
}

/// Entry shown before any real data is available.
pub fn placeholder(now: DateTime<Utc>) -> TimelineEntry {
    TimelineEntry {
        date: now,
        pass: None,
    }
}

/// Single transient entry for gallery/preview contexts.
pub async fn snapshot<S: PassSource>(
    predictor: &PassPredictor<S>,
    store: &LocationStore,
    now: DateTime<Utc>,
) -> TimelineEntry {
    TimelineEntry {
        date: now,
        pass: first_pass(predictor, store).await,
    }
}

/// Two entries a minute apart, both derived from the next upcoming pass for
/// the stored observer location. Failures yield pass-less entries.
pub async fn timeline<S: PassSource>(
    predictor: &PassPredictor<S>,
    store: &LocationStore,
    now: DateTime<Utc>,
) -> Timeline {
    let pass = first_pass(predictor, store).await;
    let entries: Vec<_> = (0..2)
        .map(|slot| TimelineEntry {
            date: now + Duration::minutes(slot),
            pass: pass.clone(),
        })
        .collect();
    let refresh_after = entries.last().map(|entry| entry.date).unwrap_or(now);
    Timeline {
        entries,
        refresh_after,
    }
}

async fn first_pass<S: PassSource>(
    predictor: &PassPredictor<S>,
    store: &LocationStore,
) -> Option<PassPrediction> {
    let stored = match store.load() {
        Ok(Some(location)) => location,
        Ok(None) => {
            log::warn!("no stored observer location for the timeline");
            return None;
        }
        Err(err) => {
            log::warn!("location store read failed: {}", err);
            return None;
        }
    };
    let observer = Observer::with_position(stored.latitude, stored.longitude);
    predictor
        .get_passes(TIMELINE_SATELLITE, observer)
        .await
        .into_iter()
        .next()
}
