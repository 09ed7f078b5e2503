//! Account entity representing a registered user.

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: u64 = 4;

/// A registered account.
///
/// Passwords are stored and compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl Account {
    /// Creates a new Account instance.
    pub fn new(id: i64, username: String, password: String) -> Self {
        Self {
            id,
            username,
            password,
        }
    }

    /// Returns true if `password` matches the stored password exactly.
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}

/// Input data for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = Account::new(1, "bob".to_string(), "1234".to_string());

        assert_eq!(account.id, 1);
        assert_eq!(account.username, "bob");
        assert_eq!(account.password, "1234");
    }

    #[test]
    fn test_password_matches_is_exact() {
        let account = Account::new(1, "bob".to_string(), "Secret".to_string());

        assert!(account.password_matches("Secret"));
        assert!(!account.password_matches("secret"));
        assert!(!account.password_matches("Secret "));
        assert!(!account.password_matches(""));
    }
}
