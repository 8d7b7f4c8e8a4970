//! Document store access.
//!
//! The club data lives in a hierarchical JSON store (`/players`, `/rounds`,
//! `/practiceTeams`). Everything above this module talks to it through
//! [`DocumentStore`], which mirrors the five primitive operations the store
//! offers plus a connectivity probe.
//!
//! Two implementations:
//! - [`RtdbStore`]: Firebase Realtime Database over its REST API.
//! - [`MemoryStore`]: in-process tree with the same write semantics, used by
//!   tests and by `PADEL_STORE=memory` for local development.

use async_trait::async_trait;
use serde_json::{Map, Value};
use ulid::Ulid;

pub mod error;
pub mod memory;
pub mod path;
pub mod rtdb;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use path::StorePath;
pub use rtdb::RtdbStore;

#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Short name for logs and the health endpoint.
    fn kind(&self) -> &'static str;

    /// Value at `path`, `None` when nothing is stored there.
    async fn get(&self, path: &StorePath) -> Result<Option<Value>, StoreError>;

    /// Replace the value at `path`. Writing `null` deletes it.
    async fn set(&self, path: &StorePath, value: Value) -> Result<(), StoreError>;

    /// Store `value` under a new unique child of `path`; returns the child key.
    async fn push(&self, path: &StorePath, value: Value) -> Result<String, StoreError>;

    /// Merge: each key in `partial` replaces that child of `path`, other
    /// children stay as they are.
    async fn update(&self, path: &StorePath, partial: Map<String, Value>)
        -> Result<(), StoreError>;

    /// Delete `path`. Removing a missing path succeeds.
    async fn remove(&self, path: &StorePath) -> Result<(), StoreError>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), StoreError> {
        self.get(&StorePath::root()).await.map(|_| ())
    }
}

/// Generate a child key the way the store's push does: unique and sortable
/// by creation time.
pub fn new_key() -> String {
    Ulid::new().to_string()
}
