//! Message entity representing a post made by an account.

/// Maximum message length, in characters.
pub const MAX_MESSAGE_LENGTH: u64 = 255;

/// A persisted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    /// Id of the authoring [`super::Account`].
    pub posted_by: i64,
    pub message_text: String,
    /// Seconds since the Unix epoch. Carried through as given.
    pub time_posted_epoch: i64,
}

impl Message {
    /// Creates a new Message instance.
    pub fn new(id: i64, posted_by: i64, message_text: String, time_posted_epoch: i64) -> Self {
        Self {
            id,
            posted_by,
            message_text,
            time_posted_epoch,
        }
    }

    /// Returns a copy of this message carrying `text` instead of the current text.
    pub fn with_text(self, text: String) -> Self {
        Self {
            message_text: text,
            ..self
        }
    }
}

/// Input data for posting a new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}
