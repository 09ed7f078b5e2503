//! Account lookup, registration and login.

use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// Service for account lookups and credential checks.
///
/// Generic over the repository so tests can inject mocks; the default
/// parameter is the trait object stored in [`crate::state::AppState`].
pub struct AccountService<R: AccountRepository + ?Sized = dyn AccountRepository> {
    repository: Arc<R>,
}

impl<R: AccountRepository + ?Sized> AccountService<R> {
    /// Creates a new account service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Looks up an account by its exact username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        self.repository.find_by_username(username).await
    }

    /// Lists every account.
    pub async fn find_all(&self) -> Result<Vec<Account>, AppError> {
        self.repository.find_all().await
    }

    /// Stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username was taken concurrently.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn persist(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let account = self.repository.create(new_account).await?;
        tracing::info!(account_id = account.id, username = %account.username, "Account registered");
        Ok(account)
    }

    /// Returns the account matching `username` only if `password` matches exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Bad credentials are
    /// reported as `Ok(None)`.
    pub async fn authenticate_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, AppError> {
        let account = self
            .repository
            .find_by_username(username)
            .await?
            .filter(|a| a.password_matches(password));

        if account.is_none() {
            tracing::debug!(username, "Login rejected");
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAccountRepository;
    use serde_json::json;

    fn bob() -> Account {
        Account::new(1, "bob".to_string(), "1234".to_string())
    }

    #[tokio::test]
    async fn test_authenticate_login_success() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_find_by_username()
            .withf(|name| name == "bob")
            .times(1)
            .returning(|_| Ok(Some(bob())));

        let service = AccountService::new(Arc::new(mock_repo));

        let result = service.authenticate_login("bob", "1234").await.unwrap();

        assert_eq!(result, Some(bob()));
    }

    #[tokio::test]
    async fn test_authenticate_login_wrong_password() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(bob())));

        let service = AccountService::new(Arc::new(mock_repo));

        let result = service.authenticate_login("bob", "4321").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_login_unknown_user() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(mock_repo));

        let result = service.authenticate_login("alice", "1234").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_persist_returns_assigned_id() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_create()
            .withf(|new| new.username == "bob" && new.password == "1234")
            .times(1)
            .returning(|new| Ok(Account::new(42, new.username, new.password)));

        let service = AccountService::new(Arc::new(mock_repo));

        let account = service
            .persist(NewAccount {
                username: "bob".to_string(),
                password: "1234".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(account.id, 42);
    }

    #[tokio::test]
    async fn test_persist_propagates_conflict() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = AccountService::new(Arc::new(mock_repo));

        let result = service
            .persist(NewAccount {
                username: "bob".to_string(),
                password: "1234".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut mock_repo = MockAccountRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 99)
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(mock_repo));

        assert!(service.find_by_id(99).await.unwrap().is_none());
    }
}
