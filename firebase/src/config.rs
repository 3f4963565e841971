// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Realtime Database authentication method.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "type")]
pub enum AuthMethod {
    /// No authentication, only works against public rules.
    #[serde(rename = "none")]
    #[default]
    None,
    /// Firebase ID token or legacy database secret, sent as the `auth` query parameter.
    #[serde(rename = "id_token")]
    IdToken {
        /// The token value.
        token: String,
    },
    /// Google OAuth2 access token, sent as a bearer token.
    #[serde(rename = "access_token")]
    AccessToken {
        /// The token value.
        token: String,
    },
}

/// Realtime Database connection configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FirebaseConfig {
    /// Database URL, e.g. `https://my-app-default-rtdb.firebaseio.com`.
    pub database_url: String,
    /// Authentication method.
    #[serde(default)]
    pub auth: AuthMethod,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl FirebaseConfig {
    /// Creates a configuration for the given database URL with default settings.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("expensify-firebase/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            auth: AuthMethod::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
