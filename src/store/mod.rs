use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt location file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The cross-process location contract: a single scalar pair plus the write
/// time, last-write-wins. One writer (whoever learns the observer location),
/// one reader domain (timeline/widget consumers).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StoredLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: DateTime<Utc>,
}

/// File-backed store for the last known observer location.
pub struct LocationStore {
    path: PathBuf,
}

impl LocationStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write through a temp file and rename so readers never observe a
    /// partial document.
    pub fn save(&self, location: &StoredLocation) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, serde_json::to_vec_pretty(location)?)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// `None` when no location has ever been written.
    pub fn load(&self) -> Result<Option<StoredLocation>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> StoredLocation {
        StoredLocation {
            latitude: 41.702,
            longitude: -76.014,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocationStore::new(dir.path().join("observer.json"));
        let written = location();
        store.save(&written).unwrap();
        let read = store.load().unwrap().unwrap();
        assert_eq!(read.latitude, written.latitude);
        assert_eq!(read.longitude, written.longitude);
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocationStore::new(dir.path().join("observer.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("observer.json");
        fs::write(&path, "not json").unwrap();
        let store = LocationStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocationStore::new(dir.path().join("observer.json"));
        store.save(&location()).unwrap();
        let mut second = location();
        second.latitude = 10.0;
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap().unwrap().latitude, 10.0);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocationStore::new(dir.path().join("nested/state/observer.json"));
        store.save(&location()).unwrap();
        assert!(store.load().unwrap().is_some());
    }
}
