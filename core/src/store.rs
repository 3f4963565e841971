// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use expensify_firebase::{DbPath, FirebaseClient, push_id};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Hierarchical key-value store holding the expense records.
///
/// Paths address JSON nodes. Reading a location where nothing is stored
/// yields `None`; writing `null` or an empty object deletes the node.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Reads the node at `path`.
    async fn get(&self, path: &DbPath) -> Result<Option<Value>, StoreError>;

    /// Replaces the node at `path`.
    async fn set(&self, path: &DbPath, value: Value) -> Result<(), StoreError>;

    /// Replaces the given children of `path`, keeping the others.
    async fn update(&self, path: &DbPath, fields: Map<String, Value>) -> Result<(), StoreError>;

    /// Deletes the node at `path` with everything below it.
    async fn remove(&self, path: &DbPath) -> Result<(), StoreError>;

    /// Generates a fresh key for a new child. Keys sort in creation order.
    fn push_key(&self) -> String {
        push_id::generate()
    }
}

#[async_trait]
impl RecordStore for FirebaseClient {
    async fn get(&self, path: &DbPath) -> Result<Option<Value>, StoreError> {
        Ok(FirebaseClient::get(self, path).await?)
    }

    async fn set(&self, path: &DbPath, value: Value) -> Result<(), StoreError> {
        Ok(FirebaseClient::set(self, path, &value).await?)
    }

    async fn update(&self, path: &DbPath, fields: Map<String, Value>) -> Result<(), StoreError> {
        Ok(FirebaseClient::update(self, path, &fields).await?)
    }

    async fn remove(&self, path: &DbPath) -> Result<(), StoreError> {
        Ok(FirebaseClient::remove(self, path).await?)
    }
}

/// The collection of a user's expenses: `users/{uid}/expenses`.
pub fn expenses_path(uid: &str) -> Result<DbPath, StoreError> {
    Ok(DbPath::root()
        .child("users")?
        .child(uid)?
        .child("expenses")?)
}

/// A single expense record: `users/{uid}/expenses/{id}`.
pub fn expense_path(uid: &str, id: &str) -> Result<DbPath, StoreError> {
    Ok(expenses_path(uid)?.child(id)?)
}
