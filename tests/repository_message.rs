mod common;

use sqlx::PgPool;
use std::sync::Arc;
use social_media_api::AppError;
use social_media_api::domain::entities::NewMessage;
use social_media_api::domain::repositories::MessageRepository;
use social_media_api::infrastructure::persistence::PgMessageRepository;

#[sqlx::test]
async fn test_create_message(pool: PgPool) {
    let author = common::create_test_account(&pool, "testuser1", "password").await;
    let repo = PgMessageRepository::new(Arc::new(pool));

    let message = repo
        .create(NewMessage {
            posted_by: author,
            message_text: "hello".to_string(),
            time_posted_epoch: 1_669_947_792,
        })
        .await
        .unwrap();

    assert!(message.id > 0);
    assert_eq!(message.posted_by, author);
    assert_eq!(message.message_text, "hello");
    assert_eq!(message.time_posted_epoch, 1_669_947_792);
}

#[sqlx::test]
async fn test_create_message_unknown_author(pool: PgPool) {
    let repo = PgMessageRepository::new(Arc::new(pool.clone()));

    let result = repo
        .create(NewMessage {
            posted_by: 999,
            message_text: "hello".to_string(),
            time_posted_epoch: 0,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    assert_eq!(common::count_messages(&pool).await, 0);
}

#[sqlx::test]
async fn test_find_by_posted_by(pool: PgPool) {
    let alice = common::create_test_account(&pool, "alice", "password").await;
    let bob = common::create_test_account(&pool, "bob", "password").await;
    common::create_test_message(&pool, alice, "one").await;
    common::create_test_message(&pool, bob, "two").await;
    common::create_test_message(&pool, alice, "three").await;

    let repo = PgMessageRepository::new(Arc::new(pool));

    let texts: Vec<_> = repo
        .find_by_posted_by(alice)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.message_text)
        .collect();
    assert_eq!(texts, vec!["one", "three"]);

    assert_eq!(repo.find_all().await.unwrap().len(), 3);
    assert!(repo.find_by_posted_by(bob + 100).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_update_message(pool: PgPool) {
    let author = common::create_test_account(&pool, "testuser1", "password").await;
    let id = common::create_test_message(&pool, author, "before").await;
    let repo = PgMessageRepository::new(Arc::new(pool));

    let existing = repo.find_by_id(id).await.unwrap().unwrap();
    let updated = repo
        .update(existing.with_text("after".to_string()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.message_text, "after");
    assert_eq!(
        repo.find_by_id(id).await.unwrap().unwrap().message_text,
        "after"
    );
}

#[sqlx::test]
async fn test_update_missing_message(pool: PgPool) {
    let repo = PgMessageRepository::new(Arc::new(pool));

    let result = repo
        .update(social_media_api::domain::entities::Message::new(
            42,
            1,
            "ghost".to_string(),
            0,
        ))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_by_id(pool: PgPool) {
    let author = common::create_test_account(&pool, "testuser1", "password").await;
    let id = common::create_test_message(&pool, author, "bye").await;
    let repo = PgMessageRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.delete_by_id(id).await.unwrap(), 1);
    assert_eq!(repo.delete_by_id(id).await.unwrap(), 0);
    assert_eq!(common::count_messages(&pool).await, 0);
}
