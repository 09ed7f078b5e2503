//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx. Queries
//! go through the runtime `query_as` API and decode into private `FromRow` row
//! structs, which are then converted into domain entities.
//!
//! # Repositories
//!
//! - [`PgAccountRepository`] - `accounts` table
//! - [`PgMessageRepository`] - `messages` table

pub mod pg_account_repository;
pub mod pg_message_repository;

pub use pg_account_repository::PgAccountRepository;
pub use pg_message_repository::PgMessageRepository;
