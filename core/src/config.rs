// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use expensify_firebase::FirebaseConfig;

/// The name of the Expensify application.
pub const APP_NAME: &str = "expensify";

/// Configuration for the Expensify application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Id of the signed-in user; all expenses live below `users/{uid}`.
    pub uid: String,

    /// Realtime Database connection.
    pub firebase: FirebaseConfig,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.uid = self.uid.trim().to_string();
        if self.uid.is_empty() {
            return Err("uid must not be empty".into());
        }

        let url = self.firebase.database_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err("firebase.database_url must not be empty".into());
        }
        self.firebase.database_url = url.to_string();

        Ok(())
    }
}
