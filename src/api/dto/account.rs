//! DTOs for registration and login.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::validate_not_blank;
use crate::domain::entities::{Account, MIN_PASSWORD_LENGTH};

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, custom(function = "validate_not_blank"))]
    pub username: Option<String>,

    #[validate(required, length(min = MIN_PASSWORD_LENGTH))]
    pub password: Option<String>,
}

/// Request body for `POST /login`.
///
/// Not validated: missing credentials simply fail to match.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// JSON representation of an account.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            account_id: a.id,
            username: a.username,
            password: a.password,
        }
    }
}
