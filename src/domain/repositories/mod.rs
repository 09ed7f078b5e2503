//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AccountRepository`] - Account storage and lookup
//! - [`MessageRepository`] - Message CRUD operations
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod account_repository;
pub mod message_repository;

pub use account_repository::AccountRepository;
pub use message_repository::MessageRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use message_repository::MockMessageRepository;
