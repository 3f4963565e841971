// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Async commands that write to the record store and then dispatch.
//!
//! Each thunk performs exactly one store operation, and dispatches only once
//! that operation has succeeded. Store failures are returned unchanged.

use std::fmt;

use expensify_firebase::{DbPath, key_order, validate_key};
use serde_json::{Map, Value};

use crate::action::{add_expense, edit_expense, remove_expense, set_expenses};
use crate::dispatch::Dispatch;
use crate::error::StoreError;
use crate::expense::{Expense, ExpenseData, ExpenseDraft, ExpenseUpdates};
use crate::store::{RecordStore, expense_path, expenses_path};

/// The authenticated user on whose behalf thunks run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    uid: String,
}

impl Auth {
    /// Creates the auth state for `uid`.
    ///
    /// # Errors
    ///
    /// Returns an error if `uid` cannot be used as a database key.
    pub fn new(uid: impl Into<String>) -> Result<Self, StoreError> {
        let uid = uid.into();
        validate_key(&uid)?;
        Ok(Self { uid })
    }

    /// The user id.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }
}

/// Everything a thunk needs: where to read and write, for whom, and where to dispatch.
#[derive(Clone, Copy)]
pub struct ThunkContext<'a> {
    store: &'a dyn RecordStore,
    auth: &'a Auth,
    dispatch: &'a dyn Dispatch,
}

impl<'a> ThunkContext<'a> {
    /// Bundles a store, the current user and a dispatch channel.
    pub fn new(store: &'a dyn RecordStore, auth: &'a Auth, dispatch: &'a dyn Dispatch) -> Self {
        Self {
            store,
            auth,
            dispatch,
        }
    }

    /// The current user.
    #[must_use]
    pub fn auth(&self) -> &Auth {
        self.auth
    }
}

impl fmt::Debug for ThunkContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThunkContext")
            .field("auth", self.auth)
            .finish_non_exhaustive()
    }
}

/// Stores a new expense built from `draft` and dispatches `ADD_EXPENSE`.
///
/// Absent draft fields take their defaults. Returns the stored expense with its new id.
pub async fn start_add_expense(
    cx: &ThunkContext<'_>,
    draft: ExpenseDraft,
) -> Result<Expense, StoreError> {
    let uid = cx.auth.uid();
    let data = draft.into_data();
    let id = cx.store.push_key();
    let path = expense_path(uid, &id)?;

    cx.store.set(&path, serde_json::to_value(&data)?).await?;

    let expense = data.with_id(id);
    tracing::info!(uid, id = %expense.id, "expense added");
    cx.dispatch.dispatch(&add_expense(expense.clone()));
    Ok(expense)
}

/// Applies `updates` to the stored expense `id` and dispatches `EDIT_EXPENSE`.
pub async fn start_edit_expense(
    cx: &ThunkContext<'_>,
    id: &str,
    updates: ExpenseUpdates,
) -> Result<(), StoreError> {
    let uid = cx.auth.uid();
    let path = expense_path(uid, id)?;

    cx.store.update(&path, updates.to_fields()).await?;

    tracing::info!(uid, id, "expense edited");
    cx.dispatch.dispatch(&edit_expense(id, updates));
    Ok(())
}

/// Deletes the stored expense `id` and dispatches `REMOVE_EXPENSE`.
pub async fn start_remove_expense(cx: &ThunkContext<'_>, id: &str) -> Result<(), StoreError> {
    let uid = cx.auth.uid();
    let path = expense_path(uid, id)?;

    cx.store.remove(&path).await?;

    tracing::info!(uid, id, "expense removed");
    cx.dispatch.dispatch(&remove_expense(id));
    Ok(())
}

/// Loads all expenses of the user and dispatches `SET_EXPENSES`.
///
/// Expenses are ordered by key; a user without expenses gets an empty list.
pub async fn start_set_expenses(cx: &ThunkContext<'_>) -> Result<Vec<Expense>, StoreError> {
    let uid = cx.auth.uid();
    let path = expenses_path(uid)?;

    let expenses = match cx.store.get(&path).await? {
        Some(node) => decode_collection(&path, node)?,
        None => Vec::new(),
    };

    tracing::info!(uid, count = expenses.len(), "expenses loaded");
    cx.dispatch.dispatch(&set_expenses(expenses.clone()));
    Ok(expenses)
}

fn decode_collection(path: &DbPath, node: Value) -> Result<Vec<Expense>, StoreError> {
    // The REST API returns mostly-integer keyed objects as arrays with null holes.
    let children: Map<String, Value> = match node {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter(|(_, record)| !record.is_null())
            .map(|(index, record)| (index.to_string(), record))
            .collect(),
        node => serde_json::from_value(node).map_err(|source| StoreError::Decode {
            path: path.clone(),
            source,
        })?,
    };

    key_order::ordered_children(children)
        .into_iter()
        .map(|(id, record)| {
            serde_json::from_value::<ExpenseData>(record)
                .map(|data| data.with_id(id.as_str()))
                .map_err(|source| StoreError::Decode {
                    path: path.child(&id).unwrap_or_else(|_| path.clone()),
                    source,
                })
        })
        .collect()
}
