// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An expense together with its id.
///
/// This is the shape carried by dispatched actions. Amounts are in cents and
/// `created_at` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Key of the record within the user's expense collection.
    pub id: String,
    /// Short description.
    pub description: String,
    /// Free-form note.
    pub note: String,
    /// Amount in cents.
    pub amount: i64,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Expense {
    /// Splits the expense into its id and the stored record.
    #[must_use]
    pub fn into_parts(self) -> (String, ExpenseData) {
        let data = ExpenseData {
            description: self.description,
            note: self.note,
            amount: self.amount,
            created_at: self.created_at,
        };
        (self.id, data)
    }
}

/// The record stored at `users/{uid}/expenses/{id}`; the id is the key, not a field.
///
/// Fields missing from a stored record read back as their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseData {
    /// Short description.
    pub description: String,
    /// Free-form note.
    pub note: String,
    /// Amount in cents.
    pub amount: i64,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl ExpenseData {
    /// Attaches an id to the record.
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Expense {
        Expense {
            id: id.into(),
            description: self.description,
            note: self.note,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}

/// Input of a new expense; absent fields take the defaults of [`ExpenseData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseDraft {
    /// Short description, defaults to empty.
    pub description: Option<String>,
    /// Free-form note, defaults to empty.
    pub note: Option<String>,
    /// Amount in cents, defaults to zero.
    pub amount: Option<i64>,
    /// Creation time in milliseconds, defaults to zero.
    pub created_at: Option<i64>,
}

impl ExpenseDraft {
    /// Merges the draft over the default record.
    #[must_use]
    pub fn into_data(self) -> ExpenseData {
        ExpenseData {
            description: self.description.unwrap_or_default(),
            note: self.note.unwrap_or_default(),
            amount: self.amount.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_default(),
        }
    }
}

/// A partial change to an expense. Only present fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseUpdates {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// New amount in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// New creation time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl ExpenseUpdates {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.note.is_none()
            && self.amount.is_none()
            && self.created_at.is_none()
    }

    /// The changed fields keyed by their wire names.
    #[must_use]
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        if let Some(description) = &self.description {
            fields.insert("description".to_string(), Value::from(description.as_str()));
        }
        if let Some(note) = &self.note {
            fields.insert("note".to_string(), Value::from(note.as_str()));
        }
        if let Some(amount) = self.amount {
            fields.insert("amount".to_string(), Value::from(amount));
        }
        if let Some(created_at) = self.created_at {
            fields.insert("createdAt".to_string(), Value::from(created_at));
        }
        fields
    }
}
