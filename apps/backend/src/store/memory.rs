//! In-process document store.
//!
//! Follows the Realtime Database write rules so code tested against it
//! behaves the same in production:
//! - `null` values and empty objects are never stored,
//! - writing below a non-object replaces it with an object,
//! - removing the last child of an object removes the object.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};

use super::{new_key, DocumentStore, StoreError, StorePath};

#[derive(Debug, Default)]
pub struct MemoryStore {
    root: RwLock<Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Value::Null),
        }
    }

    /// Start from an existing tree (normalized the same way writes are).
    pub fn with_data(data: Value) -> Self {
        Self {
            root: RwLock::new(normalize(data)),
        }
    }

    /// Copy of the whole tree.
    pub fn snapshot(&self) -> Value {
        self.root.read().clone()
    }

    fn write_at(root: &mut Value, path: &StorePath, value: Value) {
        let value = normalize(value);
        match path.split_last() {
            None => *root = value,
            Some((parent, key)) => {
                if value.is_null() {
                    remove_at(root, path.segments());
                } else {
                    let node = ensure_object_at(root, parent.segments());
                    node.insert(key.to_string(), value);
                }
            }
        }
    }
}

/// Walk to `segments`, turning anything that is not an object into one.
fn ensure_object_at<'a>(root: &'a mut Value, segments: &[String]) -> &'a mut Map<String, Value> {
    let mut node = root;
    for segment in segments {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        node = match node {
            Value::Object(map) => map
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new())),
            _ => unreachable!("node was just made an object"),
        };
    }
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just made an object"),
    }
}

/// Remove the value at `segments` and prune parents left empty.
/// Returns true when `node` itself became empty.
fn remove_at(node: &mut Value, segments: &[String]) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        *node = Value::Null;
        return true;
    };
    let Value::Object(map) = node else {
        return false;
    };
    let child_empty = match map.get_mut(first) {
        None => false,
        Some(child) if rest.is_empty() => {
            *child = Value::Null;
            true
        }
        Some(child) => remove_at(child, rest),
    };
    if child_empty {
        map.remove(first);
    }
    if map.is_empty() {
        *node = Value::Null;
        return true;
    }
    false
}

fn lookup<'a>(root: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |node, segment| node.as_object()?.get(segment))
        .filter(|v| !v.is_null())
}

/// Drop nulls and empty objects, recursively.
fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let cleaned: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, normalize(v)))
                .filter(|(_, v)| !v.is_null())
                .collect();
            if cleaned.is_empty() {
                Value::Null
            } else {
                Value::Object(cleaned)
            }
        }
        Value::Array(items) => {
            let cleaned: Vec<Value> = items.into_iter().map(normalize).collect();
            if cleaned.iter().all(Value::is_null) {
                Value::Null
            } else {
                Value::Array(cleaned)
            }
        }
        other => other,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, path: &StorePath) -> Result<Option<Value>, StoreError> {
        let root = self.root.read();
        Ok(lookup(&root, path.segments()).cloned())
    }

    async fn set(&self, path: &StorePath, value: Value) -> Result<(), StoreError> {
        let mut root = self.root.write();
        Self::write_at(&mut root, path, value);
        Ok(())
    }

    async fn push(&self, path: &StorePath, value: Value) -> Result<String, StoreError> {
        let key = new_key();
        let child = path.child(&key)?;
        let mut root = self.root.write();
        Self::write_at(&mut root, &child, value);
        Ok(key)
    }

    async fn update(
        &self,
        path: &StorePath,
        partial: Map<String, Value>,
    ) -> Result<(), StoreError> {
        // Validate every key before touching the tree so a bad key writes nothing
        let children = partial
            .into_iter()
            .map(|(key, value)| Ok((path.child(&key)?, value)))
            .collect::<Result<Vec<_>, StoreError>>()?;

        let mut root = self.root.write();
        for (child, value) in children {
            Self::write_at(&mut root, &child, value);
        }
        Ok(())
    }

    async fn remove(&self, path: &StorePath) -> Result<(), StoreError> {
        let mut root = self.root.write();
        remove_at(&mut root, path.segments());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
