mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_register_then_duplicate(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    let first = server
        .post("/register")
        .json(&json!({"username": "bob", "password": "1234"}))
        .await;
    first.assert_status_ok();
    let body = first.json::<Value>();
    assert!(body["accountId"].as_i64().unwrap() > 0);
    assert_eq!(body["username"], "bob");

    let second = server
        .post("/register")
        .json(&json!({"username": "bob", "password": "1234"}))
        .await;
    second.assert_status(StatusCode::CONFLICT);
    assert!(second.text().is_empty());

    assert_eq!(common::count_accounts(&pool).await, 1);
}

#[sqlx::test]
async fn test_register_invalid(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    server
        .post("/register")
        .json(&json!({"username": " ", "password": "1234"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/register")
        .json(&json!({"username": "bob", "password": "12"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(common::count_accounts(&pool).await, 0);
}

#[sqlx::test]
async fn test_login(pool: PgPool) {
    let id = common::create_test_account(&pool, "testuser1", "password").await;
    let server = common::create_test_server(pool);

    let ok = server
        .post("/login")
        .json(&json!({"username": "testuser1", "password": "password"}))
        .await;
    ok.assert_status_ok();
    assert_eq!(ok.json::<Value>()["accountId"], id);

    server
        .post("/login")
        .json(&json!({"username": "testuser1", "password": "wrong"}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/login")
        .json(&json!({"username": "nobody", "password": "password"}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
