//! Handlers for registration and login.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::account::{AccountResponse, LoginRequest, RegisterRequest};
use crate::domain::entities::NewAccount;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "username": "bob", "password": "1234" }
/// ```
///
/// # Errors
///
/// Returns 400 if the username is blank or the password is shorter than 4
/// characters. Returns 409 if the username is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(AppError::bad_request("Missing credentials", json!({})));
    };

    if state
        .account_service
        .find_by_username(&username)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            "Username already taken",
            json!({ "username": username }),
        ));
    }

    let account = state
        .account_service
        .persist(NewAccount { username, password })
        .await?;

    Ok(Json(account.into()))
}

/// Authenticates with username and password.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Errors
///
/// Returns 401 unless both fields match an existing account exactly.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, AppError> {
    let Json(payload) = payload?;

    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(AppError::unauthorized("Missing credentials", json!({})));
    };

    state
        .account_service
        .authenticate_login(&username, &password)
        .await?
        .map(|account| Json(account.into()))
        .ok_or_else(|| AppError::unauthorized("Invalid credentials", json!({})))
}
