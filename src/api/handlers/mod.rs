//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod accounts;
pub mod messages;

pub use accounts::{login_handler, register_handler};
pub use messages::{
    account_messages_handler, create_message_handler, delete_message_handler, get_message_handler,
    list_messages_handler, update_message_handler,
};
