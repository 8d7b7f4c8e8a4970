use std::sync::Arc;

use padel_backend::infra::state::build_state;
use padel_backend::state::app_state::AppState;
use padel_backend::store::MemoryStore;
use serde_json::Value;

/// Fresh state over an empty in-memory store.
pub async fn build_test_state() -> AppState {
    build_state()
        .with_memory_store()
        .build()
        .await
        .expect("memory state should always build")
}

/// State over a store seeded with `data`; the store handle is returned too
/// so tests can inspect what handlers wrote.
pub async fn state_with_data(data: Value) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_data(data));
    let state = build_state()
        .with_store_handle(store.clone())
        .build()
        .await
        .expect("state over a store handle should always build");
    (state, store)
}
