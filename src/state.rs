use std::sync::Arc;

use crate::application::services::{AccountService, MessageService};

/// Shared state injected into every handler.
///
/// Services hold their repositories as trait objects, so the same state type
/// serves both the PostgreSQL-backed server and mock-backed tests.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub message_service: Arc<MessageService>,
}

impl AppState {
    pub fn new(account_service: Arc<AccountService>, message_service: Arc<MessageService>) -> Self {
        Self {
            account_service,
            message_service,
        }
    }
}
