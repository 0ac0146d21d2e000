use crate::models::StoreState;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tokio::{fs, sync::Mutex};
use tracing::{error, warn};

pub const SCHEMA_VERSION: u32 = 1;

/// Durable home of the single state blob.
///
/// Both operations swallow backend failures: a store that cannot load starts
/// empty, a store that cannot save keeps running in memory and loses the
/// state on shutdown. Nothing here is allowed to take the process down.
#[async_trait]
pub trait StateBackend: Send + Sync {
    async fn load(&self) -> Option<StoreState>;
    async fn save(&self, state: &StoreState);
}

/// On-disk envelope around the state, so a future schema bump can be told
/// apart from garbage.
#[derive(Debug, Serialize, Deserialize)]
struct StoredBlob {
    version: u32,
    current_state: StoreState,
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/microsteps-db.json")
}

/// Single-file JSON persistence.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl StateBackend for FileBackend {
    async fn load(&self) -> Option<StoreState> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                error!("failed to read data file: {err}");
                return None;
            }
        };

        match serde_json::from_slice::<StoredBlob>(&bytes) {
            Ok(blob) if blob.version == SCHEMA_VERSION => Some(blob.current_state),
            Ok(blob) => {
                warn!(
                    "data file has schema version {}, expected {SCHEMA_VERSION}; starting fresh",
                    blob.version
                );
                None
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                None
            }
        }
    }

    async fn save(&self, state: &StoreState) {
        let blob = StoredBlob {
            version: SCHEMA_VERSION,
            current_state: state.clone(),
        };
        let payload = match serde_json::to_vec_pretty(&blob) {
            Ok(payload) => payload,
            Err(err) => {
                error!("failed to serialize state: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, payload).await {
            error!("failed to write data file: {err}");
        }
    }
}

/// In-process backend. Used by tests, and handy wherever durable storage is
/// unavailable and losing state on exit is acceptable.
#[derive(Default)]
pub struct MemoryBackend {
    blob: Mutex<Option<StoreState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateBackend for MemoryBackend {
    async fn load(&self) -> Option<StoreState> {
        self.blob.lock().await.clone()
    }

    async fn save(&self, state: &StoreState) {
        *self.blob.lock().await = Some(state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Habit;

    fn state_with_one_habit() -> StoreState {
        StoreState {
            habits: vec![Habit {
                id: "1".into(),
                name: "Stretch".into(),
                created_at: "2026-08-01T06:00:00+00:00".into(),
                reminder_time: None,
            }],
            completions: Vec::new(),
        }
    }

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("micro_steps_{}_{}.json", std::process::id(), name));
        path
    }

    #[tokio::test]
    async fn file_backend_round_trips_state() {
        let path = temp_file("round_trip");
        let backend = FileBackend::new(path.clone());

        backend.save(&state_with_one_habit()).await;
        let loaded = backend.load().await.expect("state should load back");
        assert_eq!(loaded.habits.len(), 1);
        assert_eq!(loaded.habits[0].name, "Stretch");

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn file_backend_missing_file_is_absent() {
        let backend = FileBackend::new(temp_file("never_written"));
        assert!(backend.load().await.is_none());
    }

    #[tokio::test]
    async fn file_backend_rejects_unknown_schema_version() {
        let path = temp_file("bad_version");
        std::fs::write(&path, r#"{"version":99,"current_state":{"habits":[],"completions":[]}}"#)
            .unwrap();

        let backend = FileBackend::new(path.clone());
        assert!(backend.load().await.is_none());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn memory_backend_starts_absent() {
        let backend = MemoryBackend::new();
        assert!(backend.load().await.is_none());

        backend.save(&state_with_one_habit()).await;
        assert!(backend.load().await.is_some());
    }
}
