use std::sync::Arc;

use tracing::{info, warn};

use crate::config::store::{StoreConfig, StoreKind};
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::store::{DocumentStore, MemoryStore, RtdbStore};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    store_config: Option<StoreConfig>,
    store_handle: Option<Arc<dyn DocumentStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store_config: None,
            store_handle: None,
        }
    }

    pub fn with_store(mut self, config: StoreConfig) -> Self {
        self.store_config = Some(config);
        self
    }

    pub fn with_memory_store(self) -> Self {
        self.with_store(StoreConfig::memory())
    }

    /// Use an already constructed store (test doubles, shared fixtures).
    /// Takes precedence over `with_store`.
    pub fn with_store_handle(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store_handle = Some(store);
        self
    }

    /// Without any store choice the state gets an empty in-memory store.
    ///
    /// A Realtime Database store is pinged once; an unreachable database is
    /// logged but does not stop startup since `/health` reports it.
    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(store) = self.store_handle {
            return Ok(AppState::new(store));
        }

        let config = self.store_config.unwrap_or_else(StoreConfig::memory);
        let store: Arc<dyn DocumentStore> = match (config.kind, config.rtdb) {
            (StoreKind::Memory, _) => Arc::new(MemoryStore::new()),
            (StoreKind::Rtdb, Some(rtdb)) => {
                let store = RtdbStore::new(&rtdb)
                    .map_err(|e| AppError::config(format!("cannot create store client: {e}")))?;
                match store.ping().await {
                    Ok(()) => info!(store = store.kind(), "store.connected"),
                    Err(e) => {
                        warn!(store = store.kind(), error = %e, "store.unreachable_at_startup")
                    }
                }
                Arc::new(store)
            }
            (StoreKind::Rtdb, None) => {
                return Err(AppError::config("rtdb store selected without connection settings"))
            }
        };

        Ok(AppState::new(store))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
