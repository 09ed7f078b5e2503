//! Repository trait for message storage.

use crate::domain::entities::{Message, NewMessage};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for messages.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMessageRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_message.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts a new message and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `posted_by` does not reference an account.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_message: NewMessage) -> Result<Message, AppError>;

    /// Finds a message by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError>;

    /// Lists all messages ordered by id.
    async fn find_all(&self) -> Result<Vec<Message>, AppError>;

    /// Lists messages authored by `account_id`, ordered by id.
    async fn find_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>, AppError>;

    /// Writes every mutable field of an existing message.
    ///
    /// Returns `None` if no row with `message.id` exists.
    async fn update(&self, message: Message) -> Result<Option<Message>, AppError>;

    /// Deletes a message by id, returning the number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError>;
}
