// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Realtime Database client for reading and writing JSON nodes.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};

use crate::config::FirebaseConfig;
use crate::error::FirebaseError;
use crate::http::HttpClient;
use crate::path::DbPath;

/// Client for a Firebase Realtime Database.
///
/// # Example
///
/// ```ignore
/// use expensify_firebase::{AuthMethod, DbPath, FirebaseClient, FirebaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FirebaseConfig {
///     database_url: "https://my-app-default-rtdb.firebaseio.com".to_string(),
///     auth: AuthMethod::IdToken {
///         token: "token".to_string(),
///     },
///     ..Default::default()
/// };
///
/// let client = FirebaseClient::new(config)?;
/// let expenses = client.get(&DbPath::parse("users/uid/expenses")?).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FirebaseClient {
    http: Arc<HttpClient>,
}

impl FirebaseClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database URL is empty or HTTP client initialization fails.
    pub fn new(config: FirebaseConfig) -> Result<Self, FirebaseError> {
        if config.database_url.trim().is_empty() {
            return Err(FirebaseError::Config("database_url is empty".to_string()));
        }

        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Reads the value at `path`, returning `None` when nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get(&self, path: &DbPath) -> Result<Option<Value>, FirebaseError> {
        tracing::debug!(%path, "reading node");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, path))
            .await?;

        match resp.json::<Value>().await? {
            Value::Null => Ok(None),
            value => Ok(Some(value)),
        }
    }

    /// Replaces the value at `path`. Writing `null` deletes the node.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn set(&self, path: &DbPath, value: &Value) -> Result<(), FirebaseError> {
        tracing::debug!(%path, "writing node");
        self.http
            .execute(
                self.http
                    .build_request(Method::PUT, path)
                    .query(&[("print", "silent")])
                    .json(value),
            )
            .await?;
        Ok(())
    }

    /// Writes the given children at `path`, leaving other children untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(
        &self,
        path: &DbPath,
        fields: &Map<String, Value>,
    ) -> Result<(), FirebaseError> {
        tracing::debug!(%path, fields = fields.len(), "updating node");
        self.http
            .execute(
                self.http
                    .build_request(Method::PATCH, path)
                    .query(&[("print", "silent")])
                    .json(fields),
            )
            .await?;
        Ok(())
    }

    /// Deletes the node at `path` and everything below it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove(&self, path: &DbPath) -> Result<(), FirebaseError> {
        tracing::debug!(%path, "removing node");
        self.http
            .execute(self.http.build_request(Method::DELETE, path))
            .await?;
        Ok(())
    }
}
