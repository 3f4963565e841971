// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core library for Expensify: expense actions, the dispatch channel, and the
//! thunks that keep a per-user record store in sync with them.

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
#![allow(clippy::missing_errors_doc)]

mod action;
mod app;
mod config;
mod dispatch;
mod error;
mod expense;
mod memory_store;
mod store;
mod thunk;

pub use crate::action::{Action, add_expense, edit_expense, remove_expense, set_expenses};
pub use crate::app::Expensify;
pub use crate::config::{APP_NAME, Config};
pub use crate::dispatch::{ActionLog, Dispatch, Dispatcher};
pub use crate::error::StoreError;
pub use crate::expense::{Expense, ExpenseData, ExpenseDraft, ExpenseUpdates};
pub use crate::memory_store::MemoryStore;
pub use crate::store::{RecordStore, expense_path, expenses_path};
pub use crate::thunk::{
    Auth, ThunkContext, start_add_expense, start_edit_expense, start_remove_expense,
    start_set_expenses,
};
pub use expensify_firebase::{AuthMethod, DbPath, FirebaseClient, FirebaseConfig, FirebaseError};
