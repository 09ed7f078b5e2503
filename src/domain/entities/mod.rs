//! Core domain entities.
//!
//! Entities are plain data structures. Each persisted type has a companion
//! `New*` struct used for inserts, before the store has assigned an id:
//!
//! - [`Account`] / [`NewAccount`]
//! - [`Message`] / [`NewMessage`]

pub mod account;
pub mod message;

pub use account::{Account, MIN_PASSWORD_LENGTH, NewAccount};
pub use message::{MAX_MESSAGE_LENGTH, Message, NewMessage};
