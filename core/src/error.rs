// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use expensify_firebase::{DbPath, FirebaseError};

/// Errors from reading or writing the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected or failed the request, or a key was invalid.
    #[error(transparent)]
    Firebase(#[from] FirebaseError),

    /// A stored node does not have the expected shape.
    #[error("failed to decode record at {path}: {source}")]
    Decode {
        /// Location of the malformed node.
        path: DbPath,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be turned into JSON.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}
