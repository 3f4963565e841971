// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use expensify_firebase::DbPath;
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::store::RecordStore;

/// In-process [`RecordStore`] holding the whole tree as one JSON value.
///
/// It follows the Realtime Database rules: `null` children and empty objects
/// are never stored, so deleting the last child of a node deletes the node.
#[derive(Debug, Default)]
pub struct MemoryStore {
    root: Mutex<Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose root holds `root`.
    #[must_use]
    pub fn with_root(root: Value) -> Self {
        Self {
            root: Mutex::new(normalize(root)),
        }
    }

    /// A copy of the whole tree, `null` when empty.
    pub fn snapshot(&self) -> Value {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Value> {
        self.root.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, path: &DbPath, value: Value) {
        let segments: Vec<&str> = path.segments().collect();
        let mut root = self.lock();
        write_at(&mut root, &segments, normalize(value));
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, path: &DbPath) -> Result<Option<Value>, StoreError> {
        let root = self.lock();
        let node = path
            .segments()
            .try_fold(&*root, |node, key| node.as_object()?.get(key));
        Ok(node.filter(|v| !v.is_null()).cloned())
    }

    async fn set(&self, path: &DbPath, value: Value) -> Result<(), StoreError> {
        tracing::debug!(%path, "setting node in memory");
        self.write(path, value);
        Ok(())
    }

    async fn update(&self, path: &DbPath, fields: Map<String, Value>) -> Result<(), StoreError> {
        tracing::debug!(%path, fields = fields.len(), "updating node in memory");
        let children = fields
            .into_iter()
            .map(|(key, value)| -> Result<_, StoreError> { Ok((path.child(&key)?, value)) })
            .collect::<Result<Vec<_>, _>>()?;

        for (child, value) in children {
            self.write(&child, value);
        }
        Ok(())
    }

    async fn remove(&self, path: &DbPath) -> Result<(), StoreError> {
        tracing::debug!(%path, "removing node in memory");
        self.write(path, Value::Null);
        Ok(())
    }
}

fn write_at(node: &mut Value, segments: &[&str], value: Value) {
    let Some((key, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    if !node.is_object() {
        if value.is_null() {
            return;
        }
        *node = Value::Object(Map::new());
    }

    let Value::Object(map) = node else {
        return;
    };

    let child = map.entry((*key).to_string()).or_insert(Value::Null);
    write_at(child, rest, value);
    if is_empty(child) {
        map.remove(*key);
    }

    if map.is_empty() {
        *node = Value::Null;
    }
}

/// Drops `null` children and empty objects recursively.
fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let map: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, normalize(v)))
                .filter(|(_, v)| !v.is_null())
                .collect();
            if map.is_empty() {
                Value::Null
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
