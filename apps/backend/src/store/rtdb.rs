//! Firebase Realtime Database REST client.
//!
//! Each operation is one HTTP call against `{base}/{path}.json`:
//!
//! | op     | method | notes                                   |
//! |--------|--------|-----------------------------------------|
//! | get    | GET    | missing paths come back as `null`       |
//! | set    | PUT    |                                         |
//! | push   | POST   | response is `{"name": "<generated key>"}` |
//! | update | PATCH  | shallow merge of the body's keys        |
//! | remove | DELETE |                                         |
//!
//! Authentication is the `auth` query parameter (database secret or ID
//! token). Errors are stripped of their URL before they leave this module.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::{DocumentStore, StoreError, StorePath};
use crate::config::store::RtdbConfig;

#[derive(Debug, Clone)]
pub struct RtdbStore {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

impl RtdbStore {
    pub fn new(config: &RtdbConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(5)))
            .build()?;

        let base_url = Url::parse(&config.url)
            .map_err(|e| StoreError::InvalidPath(format!("invalid database url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidPath(
                "database url cannot be used as a base".to_string(),
            ));
        }

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    /// REST endpoint for `path`: every segment percent-encoded, `.json` appended
    /// to the last one.
    pub fn endpoint(&self, path: &StorePath) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            match path.segments().split_last() {
                None => {
                    segments.push(".json");
                }
                Some((last, parents)) => {
                    segments.extend(parents);
                    segments.push(&format!("{last}.json"));
                }
            }
        }
        url
    }

    fn request(&self, method: Method, path: &StorePath) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(path));
        match &self.auth_token {
            Some(token) => builder.query(&[("auth", token.as_str())]),
            None => builder,
        }
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        op: &'static str,
        path: &StorePath,
    ) -> Result<Response, StoreError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(op, path = %path, status = status.as_u16(), "store.rtdb.response");

        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are small JSON objects like {"error": "Permission denied"}
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            body: truncate(&body, 200),
        })
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}

#[async_trait]
impl DocumentStore for RtdbStore {
    fn kind(&self) -> &'static str {
        "rtdb"
    }

    async fn get(&self, path: &StorePath) -> Result<Option<Value>, StoreError> {
        let response = self
            .send(self.request(Method::GET, path), "get", path)
            .await?;
        let value: Value = response.json().await?;
        Ok(if value.is_null() { None } else { Some(value) })
    }

    async fn set(&self, path: &StorePath, value: Value) -> Result<(), StoreError> {
        // print=silent: answer 204 instead of echoing the written data back
        let builder = self
            .request(Method::PUT, path)
            .query(&[("print", "silent")])
            .json(&value);
        self.send(builder, "set", path).await?;
        Ok(())
    }

    async fn push(&self, path: &StorePath, value: Value) -> Result<String, StoreError> {
        let builder = self.request(Method::POST, path).json(&value);
        let response = self.send(builder, "push", path).await?;
        let PushResponse { name } = response.json().await?;
        Ok(name)
    }

    async fn update(
        &self,
        path: &StorePath,
        partial: Map<String, Value>,
    ) -> Result<(), StoreError> {
        for key in partial.keys() {
            path.child(key)?;
        }
        let builder = self
            .request(Method::PATCH, path)
            .query(&[("print", "silent")])
            .json(&partial);
        self.send(builder, "update", path).await?;
        Ok(())
    }

    async fn remove(&self, path: &StorePath) -> Result<(), StoreError> {
        self.send(self.request(Method::DELETE, path), "remove", path)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        // shallow=true returns only the top-level keys, not the whole tree
        let root = StorePath::root();
        let builder = self
            .request(Method::GET, &root)
            .query(&[("shallow", "true")]);
        self.send(builder, "ping", &root).await?;
        Ok(())
    }
}
