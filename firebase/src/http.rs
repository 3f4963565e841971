// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and error mapping.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};

use crate::config::{AuthMethod, FirebaseConfig};
use crate::error::FirebaseError;
use crate::path::DbPath;

/// HTTP client for Realtime Database REST calls.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    config: FirebaseConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database URL is not an absolute URL or HTTP
    /// client creation fails.
    pub fn new(config: FirebaseConfig) -> Result<Self, FirebaseError> {
        let base_url = Url::parse(&config.database_url)
            .map_err(|e| FirebaseError::Config(format!("invalid database_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FirebaseError::Config(format!(
                "database_url {} cannot hold a path",
                config.database_url
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// The REST URL of the JSON document at `path`, one percent-encoded
    /// segment per key.
    pub fn url_for(&self, path: &DbPath) -> Url {
        let mut keys: Vec<String> = path.segments().map(str::to_string).collect();
        match keys.last_mut() {
            Some(last) => last.push_str(".json"),
            None => keys.push(".json".to_string()),
        }

        let mut url = self.base_url.clone();
        // checked in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(&keys);
        }
        url
    }

    /// Builds an authenticated request for the JSON document at `path`.
    pub fn build_request(&self, method: Method, path: &DbPath) -> RequestBuilder {
        let mut req = self.client.request(method, self.url_for(path));

        match &self.config.auth {
            AuthMethod::IdToken { token } => {
                req = req.query(&[("auth", token)]);
            }
            AuthMethod::AccessToken { token } => {
                req = req.bearer_auth(token);
            }
            AuthMethod::None => {}
        }

        req
    }

    /// Executes a request and maps error statuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, FirebaseError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        let message = server_error_message(&text).unwrap_or(text);
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                FirebaseError::PermissionDenied(message)
            }
            StatusCode::NOT_FOUND => FirebaseError::NotFound(message),
            status => FirebaseError::Http(format!("{status}: {message}")),
        })
    }
}

/// Extracts the `error` field the REST API puts in failure bodies.
fn server_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
