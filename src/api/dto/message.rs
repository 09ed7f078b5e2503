//! DTOs for message endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::validate_not_blank;
use crate::domain::entities::{MAX_MESSAGE_LENGTH, Message};

/// Request body for `POST /messages`.
///
/// A `messageId` in the body is ignored; the store assigns ids.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    #[validate(required)]
    pub posted_by: Option<i64>,

    #[validate(
        required,
        length(max = MAX_MESSAGE_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub message_text: Option<String>,

    /// Defaults to the current time when absent.
    pub time_posted_epoch: Option<i64>,
}

/// Request body for `PATCH /messages/{id}`. Only the text is read.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[validate(
        required,
        length(max = MAX_MESSAGE_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub message_text: Option<String>,
}

/// JSON representation of a message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            message_id: m.id,
            posted_by: m.posted_by,
            message_text: m.message_text,
            time_posted_epoch: m.time_posted_epoch,
        }
    }
}
