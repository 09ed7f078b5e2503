//! API route configuration.

use crate::api::handlers::{
    account_messages_handler, create_message_handler, delete_message_handler, get_message_handler,
    list_messages_handler, login_handler, register_handler, update_message_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `POST   /register`                      - Register an account
/// - `POST   /login`                         - Log in
/// - `GET    /messages`                      - List all messages
/// - `POST   /messages`                      - Create a message
/// - `GET    /messages/{message_id}`         - Fetch one message
/// - `PATCH  /messages/{message_id}`         - Replace a message's text
/// - `DELETE /messages/{message_id}`         - Delete a message
/// - `GET    /accounts/{account_id}/messages` - List an account's messages
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route(
            "/messages",
            get(list_messages_handler).post(create_message_handler),
        )
        .route(
            "/messages/{message_id}",
            get(get_message_handler)
                .patch(update_message_handler)
                .delete(delete_message_handler),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(account_messages_handler),
        )
}
