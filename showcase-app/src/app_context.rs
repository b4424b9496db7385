use crate::application::{sample_ideas, IdeaStore};
use crate::infrastructure::storage::FileStorage;
use showcase_errors::AppError;
use std::sync::{Arc, Mutex};

const DEFAULT_DATA_DIR: &str = "data";

/// Shared handle to the one store. Every access goes through the lock, so
/// id allocation and upvote read-modify-write never interleave.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<Mutex<IdeaStore<FileStorage>>>,
}

impl AppContext {
    pub fn new(store: IdeaStore<FileStorage>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let data_dir =
            std::env::var("SHOWCASE_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let seed = std::env::var("SHOWCASE_SEED")
            .map(|v| !matches!(v.trim(), "false" | "0"))
            .unwrap_or(true);

        let mut store = IdeaStore::initialize(FileStorage::open(data_dir)?);
        if seed {
            store.seed_if_empty(sample_ideas())?;
        }

        Ok(Self::new(store))
    }

    /// Runs `f` with exclusive access to the store. Never hold this across an await.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&mut IdeaStore<FileStorage>) -> T,
    ) -> Result<T, AppError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| AppError::Internal("idea store lock poisoned".to_string()))?;
        Ok(f(&mut store))
    }
}
