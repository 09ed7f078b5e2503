#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use social_media_api::server::build_state;

pub async fn create_test_account(pool: &PgPool, username: &str, password: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO accounts (username, password) VALUES ($1, $2) RETURNING account_id",
    )
    .bind(username)
    .bind(password)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_message(pool: &PgPool, posted_by: i64, text: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO messages (posted_by, message_text, time_posted_epoch) VALUES ($1, $2, 1669947792) RETURNING message_id",
    )
    .bind(posted_by)
    .bind(text)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_messages(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_accounts(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Full API router over a real database.
pub fn create_test_server(pool: PgPool) -> TestServer {
    let state = build_state(Arc::new(pool));
    TestServer::new(social_media_api::api::routes::routes().with_state(state)).unwrap()
}
