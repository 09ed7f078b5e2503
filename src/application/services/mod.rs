//! Business logic services for the application layer.

pub mod account_service;
pub mod message_service;

pub use account_service::AccountService;
pub use message_service::MessageService;
