//! PostgreSQL implementation of the message repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Message, NewMessage};
use crate::domain::repositories::MessageRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct MessageRow {
    message_id: i64,
    posted_by: i64,
    message_text: String,
    time_posted_epoch: i64,
}

impl From<MessageRow> for Message {
    fn from(r: MessageRow) -> Self {
        Message::new(r.message_id, r.posted_by, r.message_text, r.time_posted_epoch)
    }
}

/// PostgreSQL repository for messages.
///
/// `posted_by` is a foreign key into `accounts`; inserting a message for an
/// unknown author fails at the database with a foreign key violation.
pub struct PgMessageRepository {
    pool: Arc<PgPool>,
}

impl PgMessageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn create(&self, new_message: NewMessage) -> Result<Message, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (posted_by, message_text, time_posted_epoch)
            VALUES ($1, $2, $3)
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            "#,
        )
        .bind(new_message.posted_by)
        .bind(&new_message.message_text)
        .bind(new_message.time_posted_epoch)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM messages
            WHERE message_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Message::from))
    }

    async fn find_all(&self) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM messages
            ORDER BY message_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn find_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM messages
            WHERE posted_by = $1
            ORDER BY message_id
            "#,
        )
        .bind(account_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn update(&self, message: Message) -> Result<Option<Message>, AppError> {
        // posted_by is fixed at creation; only text and timestamp are writable.
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            UPDATE messages SET
                message_text      = $2,
                time_posted_epoch = $3
            WHERE message_id = $1
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            "#,
        )
        .bind(message.id)
        .bind(&message.message_text)
        .bind(message.time_posted_epoch)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Message::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM messages WHERE message_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
