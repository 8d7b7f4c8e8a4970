use async_trait::async_trait;
use padel_backend::store::{DocumentStore, StoreError, StorePath};
use serde_json::{Map, Value};

/// Store double whose every operation fails the same way.
#[derive(Debug, Clone)]
pub enum FailingStore {
    /// Connection refused / timeout
    Unreachable,
    /// The database answered 401 with a body that must never reach clients
    Denied,
}

impl FailingStore {
    fn error(&self) -> StoreError {
        match self {
            FailingStore::Unreachable => StoreError::Unreachable {
                detail: "error sending request for url (https://club.firebaseio.com/rounds.json?auth=s3cr3t)".into(),
                timeout: true,
            },
            FailingStore::Denied => StoreError::Status {
                status: 401,
                body: "{\"error\": \"Permission denied\"}".into(),
            },
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn kind(&self) -> &'static str {
        "failing"
    }

    async fn get(&self, _path: &StorePath) -> Result<Option<Value>, StoreError> {
        Err(self.error())
    }

    async fn set(&self, _path: &StorePath, _value: Value) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn push(&self, _path: &StorePath, _value: Value) -> Result<String, StoreError> {
        Err(self.error())
    }

    async fn update(
        &self,
        _path: &StorePath,
        _partial: Map<String, Value>,
    ) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn remove(&self, _path: &StorePath) -> Result<(), StoreError> {
        Err(self.error())
    }
}
