// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data shared by the integration tests.

use expensify_core::Expense;
use serde_json::{Map, Value};

/// The user every test runs as.
pub const UID: &str = "thisismytestuid";

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// The three fixture expenses, in key order.
#[must_use]
pub fn expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "1".to_string(),
            description: "Gum".to_string(),
            note: String::new(),
            amount: 195,
            created_at: 0,
        },
        Expense {
            id: "2".to_string(),
            description: "Rent".to_string(),
            note: String::new(),
            amount: 109_500,
            created_at: -4 * DAY_MS,
        },
        Expense {
            id: "3".to_string(),
            description: "Credit Card".to_string(),
            note: String::new(),
            amount: 4500,
            created_at: 4 * DAY_MS,
        },
    ]
}

/// The fixtures as stored below `users/{uid}/expenses`: keyed by id, without the id field.
#[must_use]
pub fn expenses_tree() -> Value {
    let records: Map<String, Value> = expenses()
        .into_iter()
        .map(|expense| {
            let (id, data) = expense.into_parts();
            (id, serde_json::to_value(data).unwrap())
        })
        .collect();
    Value::Object(records)
}

/// The fixtures as the REST API serves them: integer keys turn the collection
/// into an array with a `null` at index 0.
#[must_use]
pub fn expenses_array() -> Value {
    let mut records = vec![Value::Null];
    records.extend(
        expenses()
            .into_iter()
            .map(|expense| serde_json::to_value(expense.into_parts().1).unwrap()),
    );
    Value::Array(records)
}
