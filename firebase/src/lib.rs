// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Firebase Realtime Database client speaking the REST protocol.
//!
//! Every location in the database is a JSON value addressed by a [`DbPath`].
//! The client maps reads and writes onto `GET`, `PUT`, `PATCH` and `DELETE`
//! requests against `{database_url}/{path}.json`.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::similar_names, clippy::single_match_else)]

mod client;
mod config;
mod error;
mod http;
pub mod key_order;
mod path;
pub mod push_id;

pub use crate::client::FirebaseClient;
pub use crate::config::{AuthMethod, FirebaseConfig};
pub use crate::error::FirebaseError;
pub use crate::path::{DbPath, validate_key};
