// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Realtime Database client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FirebaseError {
    /// Transport failure or unexpected HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The security rules rejected the request, or the token is invalid.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The database or location does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A path or key is not a valid database location.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FirebaseError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
