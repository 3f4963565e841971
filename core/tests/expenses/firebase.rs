// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Thunk tests against the Realtime Database REST client, served by wiremock.

use expensify_core::{
    ActionLog, AuthMethod, Config, ExpenseDraft, ExpenseUpdates, Expensify, FirebaseConfig,
    StoreError, start_add_expense, start_edit_expense, start_remove_expense, start_set_expenses,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{UID, expenses, expenses_array, expenses_tree};

fn app_for(server: &MockServer) -> Expensify {
    let config = Config {
        uid: UID.to_string(),
        firebase: FirebaseConfig {
            database_url: server.uri(),
            auth: AuthMethod::IdToken {
                token: "test-token".to_string(),
            },
            ..Default::default()
        },
    };
    Expensify::new(config).expect("Failed to create app")
}

#[tokio::test]
async fn fetch_expenses_over_rest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/thisismytestuid/expenses.json"))
        .and(query_param("auth", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(expenses_tree()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let log = ActionLog::new();
    let loaded = start_set_expenses(&app.context(&log)).await.unwrap();

    assert_eq!(loaded, expenses());
    assert_eq!(
        serde_json::to_value(&log.actions()[0]).unwrap(),
        json!({ "type": "SET_EXPENSES", "expenses": serde_json::to_value(expenses()).unwrap() })
    );
}

#[tokio::test]
async fn fetch_expenses_served_as_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/thisismytestuid/expenses.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(expenses_array()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let log = ActionLog::new();
    let loaded = start_set_expenses(&app.context(&log)).await.unwrap();

    assert_eq!(loaded, expenses());
    assert_eq!(log.actions().len(), 1);
    assert_eq!(log.actions()[0].kind(), "SET_EXPENSES");
}

#[tokio::test]
async fn add_expense_over_rest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/users/thisismytestuid/expenses/[-_0-9A-Za-z]{20}\.json$"))
        .and(body_json(json!({ "description": "", "note": "", "amount": 0, "createdAt": 0 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let log = ActionLog::new();
    let expense = start_add_expense(&app.context(&log), ExpenseDraft::default())
        .await
        .unwrap();

    assert_eq!(expense.id.len(), 20);
    assert_eq!(log.actions().len(), 1);
}

#[tokio::test]
async fn edit_expense_over_rest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/users/thisismytestuid/expenses/2.json"))
        .and(body_json(json!({ "amount": 3000 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let log = ActionLog::new();
    let updates = ExpenseUpdates {
        amount: Some(3000),
        ..Default::default()
    };
    start_edit_expense(&app.context(&log), "2", updates)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&log.actions()[0]).unwrap(),
        json!({ "type": "EDIT_EXPENSE", "id": "2", "updates": { "amount": 3000 } })
    );
}

#[tokio::test]
async fn remove_expense_over_rest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/thisismytestuid/expenses/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let log = ActionLog::new();
    start_remove_expense(&app.context(&log), "1").await.unwrap();

    assert_eq!(
        serde_json::to_value(&log.actions()[0]).unwrap(),
        json!({ "type": "REMOVE_EXPENSE", "id": "1" })
    );
}

#[tokio::test]
async fn ids_are_escaped_in_request_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/thisismytestuid/expenses/1%3Fx.json"))
        .and(query_param("auth", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/users/thisismytestuid/expenses/1%252Fnote.json"))
        .and(body_json(json!({ "note": "escaped" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let log = ActionLog::new();
    start_remove_expense(&app.context(&log), "1?x")
        .await
        .unwrap();
    let updates = ExpenseUpdates {
        note: Some("escaped".to_string()),
        ..Default::default()
    };
    start_edit_expense(&app.context(&log), "1%2Fnote", updates)
        .await
        .unwrap();

    assert_eq!(log.actions().len(), 2);
}

#[tokio::test]
async fn permission_denied_rejects_thunk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Permission denied" })),
        )
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let log = ActionLog::new();
    let err = start_remove_expense(&app.context(&log), "1")
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Firebase(_)), "{err:?}");
    assert!(log.actions().is_empty());
}

#[test]
fn app_rejects_empty_uid() {
    let config = Config {
        uid: String::new(),
        firebase: FirebaseConfig::new("https://expensify-app.firebaseio.com"),
    };
    assert!(Expensify::new(config).is_err());
}
