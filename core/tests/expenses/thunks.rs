// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Thunk tests against a seeded in-memory store.

use expensify_core::{
    Action, ActionLog, Auth, ExpenseDraft, ExpenseUpdates, MemoryStore, RecordStore, StoreError,
    ThunkContext, expenses_path, start_add_expense, start_edit_expense, start_remove_expense,
    start_set_expenses,
};
use serde_json::json;

use crate::common::{FailingStore, Harness, UID, expenses};

#[tokio::test]
async fn remove_expense_from_store() {
    let harness = Harness::seeded().await;
    let id = expenses()[0].id.clone();

    start_remove_expense(&harness.context(), &id).await.unwrap();

    let actions = harness.log.actions();
    assert_eq!(
        serde_json::to_value(&actions[0]).unwrap(),
        json!({ "type": "REMOVE_EXPENSE", "id": id })
    );
    assert_eq!(harness.read_expense(&id).await, None);
    assert!(harness.read_expense(&expenses()[1].id).await.is_some());
}

#[tokio::test]
async fn edit_expense_in_store() {
    let harness = Harness::seeded().await;
    let id = expenses()[1].id.clone();
    let updates = ExpenseUpdates {
        description: Some("testingchange".to_string()),
        amount: Some(3000),
        note: Some("This one is better".to_string()),
        created_at: Some(1000),
    };

    start_edit_expense(&harness.context(), &id, updates.clone())
        .await
        .unwrap();

    let actions = harness.log.actions();
    assert_eq!(
        actions[0],
        Action::EditExpense {
            id: id.clone(),
            updates: updates.clone()
        }
    );
    assert_eq!(
        harness.read_expense(&id).await,
        Some(serde_json::to_value(&updates).unwrap())
    );
}

#[tokio::test]
async fn edit_expense_keeps_untouched_fields() {
    let harness = Harness::seeded().await;
    let updates = ExpenseUpdates {
        note: Some("New note value".to_string()),
        ..Default::default()
    };

    start_edit_expense(&harness.context(), "1", updates)
        .await
        .unwrap();

    assert_eq!(
        harness.read_expense("1").await,
        Some(json!({
            "description": "Gum",
            "note": "New note value",
            "amount": 195,
            "createdAt": 0
        }))
    );
}

#[tokio::test]
async fn add_expense_to_store() {
    let harness = Harness::seeded().await;
    let expense_data = json!({
        "description": "Mouse",
        "amount": 3000,
        "note": "This one is better",
        "createdAt": 1000
    });
    let draft: ExpenseDraft = serde_json::from_value(expense_data.clone()).unwrap();

    let expense = start_add_expense(&harness.context(), draft).await.unwrap();

    let actions = harness.log.actions();
    let Action::AddExpense { expense: added } = &actions[0] else {
        panic!("Expected ADD_EXPENSE, got {:?}", actions[0]);
    };
    assert_eq!(added, &expense);
    assert!(!added.id.is_empty());

    let mut expected = expense_data.clone();
    expected["id"] = json!(added.id);
    assert_eq!(serde_json::to_value(added).unwrap(), expected);

    assert_eq!(harness.read_expense(&added.id).await, Some(expense_data));
}

#[tokio::test]
async fn add_expense_with_defaults_to_store() {
    let harness = Harness::seeded().await;
    let defaults = json!({ "description": "", "amount": 0, "note": "", "createdAt": 0 });

    let expense = start_add_expense(&harness.context(), ExpenseDraft::default())
        .await
        .unwrap();

    let actions = harness.log.actions();
    let mut expected = defaults.clone();
    expected["id"] = json!(expense.id);
    assert_eq!(
        serde_json::to_value(&actions[0]).unwrap(),
        json!({ "type": "ADD_EXPENSE", "expense": expected })
    );
    assert_eq!(harness.read_expense(&expense.id).await, Some(defaults));
}

#[tokio::test]
async fn added_expenses_get_distinct_increasing_ids() {
    let harness = Harness::seeded().await;
    let cx = harness.context();

    let first = start_add_expense(&cx, ExpenseDraft::default()).await.unwrap();
    let second = start_add_expense(&cx, ExpenseDraft::default()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(first.id < second.id);

    let loaded = start_set_expenses(&cx).await.unwrap();
    let ids: Vec<_> = loaded.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", first.id.as_str(), second.id.as_str()]);
}

#[tokio::test]
async fn fetch_expenses_from_store() {
    let harness = Harness::seeded().await;

    let loaded = start_set_expenses(&harness.context()).await.unwrap();

    let actions = harness.log.actions();
    assert_eq!(
        serde_json::to_value(&actions[0]).unwrap(),
        json!({
            "type": "SET_EXPENSES",
            "expenses": serde_json::to_value(expenses()).unwrap()
        })
    );
    assert_eq!(loaded, expenses());
}

#[tokio::test]
async fn fetch_expenses_for_user_without_any() {
    let store = MemoryStore::new();
    let auth = Auth::new("nobody").unwrap();
    let log = ActionLog::new();

    let loaded = start_set_expenses(&ThunkContext::new(&store, &auth, &log))
        .await
        .unwrap();

    assert!(loaded.is_empty());
    assert_eq!(
        serde_json::to_value(&log.actions()[0]).unwrap(),
        json!({ "type": "SET_EXPENSES", "expenses": [] })
    );
}

#[tokio::test]
async fn expenses_are_scoped_per_user() {
    let harness = Harness::seeded().await;
    let other = Auth::new("someoneelse").unwrap();
    let log = ActionLog::new();
    let cx = ThunkContext::new(&harness.store, &other, &log);

    start_add_expense(&cx, ExpenseDraft::default()).await.unwrap();

    let mine = start_set_expenses(&harness.context()).await.unwrap();
    assert_eq!(mine, expenses());
    let theirs = start_set_expenses(&cx).await.unwrap();
    assert_eq!(theirs.len(), 1);
}

#[tokio::test]
async fn malformed_collection_is_a_decode_error() {
    let harness = Harness::seeded().await;
    harness
        .store
        .set(&expenses_path(UID).unwrap(), json!({ "1": { "amount": "lots" } }))
        .await
        .unwrap();

    let err = start_set_expenses(&harness.context()).await.unwrap_err();

    match err {
        StoreError::Decode { path, .. } => {
            assert_eq!(path.to_string(), "users/thisismytestuid/expenses/1");
        }
        other => panic!("Expected Decode error, got {other:?}"),
    }
    assert!(harness.log.actions().is_empty());
}

#[tokio::test]
async fn array_collection_skips_missing_indices() {
    let harness = Harness::seeded().await;
    harness
        .store
        .set(
            &expenses_path(UID).unwrap(),
            json!([null, null, { "description": "Rent", "amount": 109500 }]),
        )
        .await
        .unwrap();

    let loaded = start_set_expenses(&harness.context()).await.unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "2");
    assert_eq!(loaded[0].description, "Rent");
}

#[tokio::test]
async fn scalar_collection_is_a_decode_error() {
    let harness = Harness::seeded().await;
    harness
        .store
        .set(&expenses_path(UID).unwrap(), json!("not a collection"))
        .await
        .unwrap();

    let err = start_set_expenses(&harness.context()).await.unwrap_err();

    match err {
        StoreError::Decode { path, .. } => {
            assert_eq!(path.to_string(), "users/thisismytestuid/expenses");
        }
        other => panic!("Expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_id_is_rejected_before_writing() {
    let harness = Harness::seeded().await;

    let err = start_remove_expense(&harness.context(), "no/slashes")
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Firebase(_)), "{err:?}");
    assert!(harness.log.actions().is_empty());
    assert_eq!(start_set_expenses(&harness.context()).await.unwrap().len(), 3);
}

#[tokio::test]
async fn store_failures_propagate_without_dispatch() {
    let store = FailingStore;
    let auth = Auth::new(UID).unwrap();
    let log = ActionLog::new();
    let cx = ThunkContext::new(&store, &auth, &log);

    assert!(start_add_expense(&cx, ExpenseDraft::default()).await.is_err());
    assert!(
        start_edit_expense(&cx, "1", ExpenseUpdates::default())
            .await
            .is_err()
    );
    assert!(start_remove_expense(&cx, "1").await.is_err());
    let err = start_set_expenses(&cx).await.unwrap_err();

    assert_eq!(err.to_string(), "Permission denied: Permission denied");
    assert!(log.actions().is_empty());
}

#[test]
fn auth_rejects_invalid_uid() {
    assert!(Auth::new("").is_err());
    assert!(Auth::new("a.b").is_err());
    assert_eq!(Auth::new(UID).unwrap().uid(), UID);
}
