// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::expense::{Expense, ExpenseUpdates};

/// A state transition message, serialized with its kind under `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// An expense was added.
    AddExpense {
        /// The stored expense including its id.
        expense: Expense,
    },
    /// Some fields of an expense changed.
    EditExpense {
        /// Id of the edited expense.
        id: String,
        /// The changed fields.
        updates: ExpenseUpdates,
    },
    /// An expense was removed.
    RemoveExpense {
        /// Id of the removed expense.
        id: String,
    },
    /// The full expense list was loaded.
    SetExpenses {
        /// All expenses of the user, in key order.
        expenses: Vec<Expense>,
    },
}

impl Action {
    /// The wire name of the action kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddExpense { .. } => "ADD_EXPENSE",
            Self::EditExpense { .. } => "EDIT_EXPENSE",
            Self::RemoveExpense { .. } => "REMOVE_EXPENSE",
            Self::SetExpenses { .. } => "SET_EXPENSES",
        }
    }
}

/// Builds an `ADD_EXPENSE` action.
#[must_use]
pub fn add_expense(expense: Expense) -> Action {
    Action::AddExpense { expense }
}

/// Builds an `EDIT_EXPENSE` action.
#[must_use]
pub fn edit_expense(id: impl Into<String>, updates: ExpenseUpdates) -> Action {
    Action::EditExpense {
        id: id.into(),
        updates,
    }
}

/// Builds a `REMOVE_EXPENSE` action.
#[must_use]
pub fn remove_expense(id: impl Into<String>) -> Action {
    Action::RemoveExpense { id: id.into() }
}

/// Builds a `SET_EXPENSES` action.
#[must_use]
pub fn set_expenses(expenses: Vec<Expense>) -> Action {
    Action::SetExpenses { expenses }
}
