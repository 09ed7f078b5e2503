//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Account lookup, registration and login
//! - [`services::message_service::MessageService`] - Message CRUD

pub mod services;
