//! Message persistence service.

use std::sync::Arc;

use crate::domain::entities::{Message, NewMessage};
use crate::domain::repositories::MessageRepository;
use crate::error::AppError;

/// Service for creating, reading, updating and deleting messages.
///
/// Validation of message text happens at the HTTP boundary; this service
/// only orchestrates repository calls.
pub struct MessageService<R: MessageRepository + ?Sized = dyn MessageRepository> {
    repository: Arc<R>,
}

impl<R: MessageRepository + ?Sized> MessageService<R> {
    /// Creates a new message service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up a message by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Lists all messages.
    pub async fn find_all(&self) -> Result<Vec<Message>, AppError> {
        self.repository.find_all().await
    }

    /// Lists messages posted by `account_id`. Unknown accounts yield an empty list.
    pub async fn find_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>, AppError> {
        self.repository.find_by_posted_by(account_id).await
    }

    /// Inserts a new message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the author vanished before the insert.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn persist(&self, new_message: NewMessage) -> Result<Message, AppError> {
        let message = self.repository.create(new_message).await?;
        tracing::info!(message_id = message.id, posted_by = message.posted_by, "Message created");
        Ok(message)
    }

    /// Writes back an existing message.
    ///
    /// Returns `None` if the message no longer exists.
    pub async fn save(&self, message: Message) -> Result<Option<Message>, AppError> {
        let id = message.id;
        let saved = self.repository.update(message).await?;
        if saved.is_some() {
            tracing::info!(message_id = id, "Message updated");
        }
        Ok(saved)
    }

    /// Deletes a message, returning how many rows were removed.
    ///
    /// Deleting an absent id is a silent no-op returning `0`.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let deleted = self.repository.delete_by_id(id).await?;
        if deleted > 0 {
            tracing::info!(message_id = id, "Message deleted");
        }
        Ok(deleted)
    }
}
