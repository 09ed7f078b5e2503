//! Handlers for message endpoints.
//!
//! Absence is never an error here: reads and deletes of a missing message
//! answer `200 OK` with an empty body.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::api::dto::message::{CreateMessageRequest, MessageResponse, UpdateMessageRequest};
use crate::domain::entities::NewMessage;
use crate::error::AppError;
use crate::state::AppState;

/// `200 OK` with no body.
fn empty_ok() -> Response {
    StatusCode::OK.into_response()
}

/// Creates a message.
///
/// # Endpoint
///
/// `POST /messages`
///
/// # Request Body
///
/// ```json
/// { "postedBy": 1, "messageText": "hello", "timePostedEpoch": 1669947792 }
/// ```
///
/// # Errors
///
/// Returns 400 if the text is blank or longer than 255 characters, or if
/// `postedBy` does not reference an existing account.
pub async fn create_message_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (Some(posted_by), Some(message_text)) = (payload.posted_by, payload.message_text) else {
        return Err(AppError::bad_request("Missing required fields", json!({})));
    };

    if state.account_service.find_by_id(posted_by).await?.is_none() {
        return Err(AppError::bad_request(
            "Author does not exist",
            json!({ "postedBy": posted_by }),
        ));
    }

    let message = state
        .message_service
        .persist(NewMessage {
            posted_by,
            message_text,
            time_posted_epoch: payload
                .time_posted_epoch
                .unwrap_or_else(|| Utc::now().timestamp()),
        })
        .await?;

    Ok(Json(message.into()))
}

/// Lists every message.
///
/// # Endpoint
///
/// `GET /messages`
pub async fn list_messages_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = state.message_service.find_all().await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// Returns one message, or an empty body if it does not exist.
///
/// # Endpoint
///
/// `GET /messages/{message_id}`
pub async fn get_message_handler(
    Path(message_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    Ok(match state.message_service.find_by_id(message_id).await? {
        Some(message) => Json(MessageResponse::from(message)).into_response(),
        None => empty_ok(),
    })
}

/// Deletes a message.
///
/// # Endpoint
///
/// `DELETE /messages/{message_id}`
///
/// Responds with the number of deleted rows (`1`) when the message existed and
/// with an empty body otherwise, so repeated calls are safe.
pub async fn delete_message_handler(
    Path(message_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let deleted = state.message_service.delete_by_id(message_id).await?;

    Ok(if deleted > 0 {
        Json(deleted).into_response()
    } else {
        empty_ok()
    })
}

/// Replaces the text of an existing message.
///
/// # Endpoint
///
/// `PATCH /messages/{message_id}`
///
/// # Request Body
///
/// ```json
/// { "messageText": "updated text" }
/// ```
///
/// Responds with the number of updated rows (`1`).
///
/// # Errors
///
/// Returns 400 if the message does not exist or the new text is blank or longer
/// than 255 characters.
pub async fn update_message_handler(
    Path(message_id): Path<i64>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Result<Json<u64>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let Some(message_text) = payload.message_text else {
        return Err(AppError::bad_request("Missing messageText", json!({})));
    };

    let not_found = || AppError::bad_request("Message not found", json!({ "messageId": message_id }));

    let existing = state
        .message_service
        .find_by_id(message_id)
        .await?
        .ok_or_else(not_found)?;

    state
        .message_service
        .save(existing.with_text(message_text))
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(1))
}

/// Lists messages posted by an account.
///
/// # Endpoint
///
/// `GET /accounts/{account_id}/messages`
///
/// Unknown accounts yield an empty list.
pub async fn account_messages_handler(
    Path(account_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = state.message_service.find_by_posted_by(account_id).await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}
