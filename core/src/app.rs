// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use expensify_firebase::FirebaseClient;

use crate::config::Config;
use crate::dispatch::Dispatch;
use crate::store::RecordStore;
use crate::thunk::{Auth, ThunkContext};

/// Expensify application core: a record store bound to the signed-in user.
#[derive(Debug, Clone)]
pub struct Expensify<S = FirebaseClient> {
    auth: Auth,
    store: S,
}

impl Expensify<FirebaseClient> {
    /// Creates an instance talking to the Realtime Database described by `config`.
    pub fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let auth = Auth::new(config.uid)?;
        tracing::debug!(
            uid = auth.uid(),
            url = %config.firebase.database_url,
            "connecting to realtime database"
        );
        let store = FirebaseClient::new(config.firebase)
            .map_err(|e| format!("Failed to initialize Firebase client: {e}"))?;

        Ok(Self { auth, store })
    }
}

impl<S: RecordStore> Expensify<S> {
    /// Creates an instance over an arbitrary store.
    pub fn with_store(auth: Auth, store: S) -> Self {
        Self { auth, store }
    }

    /// The signed-in user.
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// The underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// A thunk context dispatching into `dispatch`.
    pub fn context<'a>(&'a self, dispatch: &'a dyn Dispatch) -> ThunkContext<'a> {
        ThunkContext::new(&self.store, &self.auth, dispatch)
    }
}
