// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::error::FirebaseError;

/// Longest key the Realtime Database accepts, in UTF-8 bytes.
const MAX_KEY_BYTES: usize = 768;

/// Location of a node in the database tree.
///
/// A `DbPath` is a list of validated keys such as `users/abc/expenses`. The
/// empty path is the database root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DbPath(Vec<String>);

impl DbPath {
    /// The database root.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Parses a slash-separated path. Leading, trailing and repeated slashes are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if any segment is not a valid key.
    pub fn parse(path: &str) -> Result<Self, FirebaseError> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(Self::root(), |acc, key| acc.child(key))
    }

    /// Returns the path of the child `key` below this location.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid key.
    pub fn child(&self, key: &str) -> Result<Self, FirebaseError> {
        validate_key(key)?;
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Ok(Self(segments))
    }

    /// Iterates over the keys from the root down.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for DbPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.join("/").fmt(f)
    }
}

impl FromStr for DbPath {
    type Err = FirebaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Checks that `key` can name a child node.
///
/// Keys must be non-empty, at most 768 bytes, and must not contain `.`, `$`,
/// `#`, `[`, `]`, `/` or ASCII control characters.
///
/// # Errors
///
/// Returns [`FirebaseError::InvalidPath`] describing the offending key.
pub fn validate_key(key: &str) -> Result<(), FirebaseError> {
    if key.is_empty() {
        return Err(FirebaseError::InvalidPath("empty key".to_string()));
    }

    if key.len() > MAX_KEY_BYTES {
        return Err(FirebaseError::InvalidPath(format!(
            "key longer than {MAX_KEY_BYTES} bytes"
        )));
    }

    match key
        .chars()
        .find(|c| matches!(c, '.' | '$' | '#' | '[' | ']' | '/') || c.is_ascii_control())
    {
        Some(c) => Err(FirebaseError::InvalidPath(format!(
            "key {key:?} contains forbidden character {c:?}"
        ))),
        None => Ok(()),
    }
}
