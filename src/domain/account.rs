use serde::{Deserialize, Serialize};

use super::address::Address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub language_preference: String,
    pub favourite_category_id: Option<String>,
    pub list_option: bool,
    pub banner_option: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: Option<String>,
    pub address: Address,
    pub phone: String,
    pub profile: Profile,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub account: Account,
    pub password: String,
}

/// Whether an account update touches the stored password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordChange {
    Keep,
    Replace(String),
}

impl PasswordChange {
    /// A missing or empty password from a form means "leave it alone".
    pub fn from_input(input: Option<&str>) -> Self {
        match input {
            Some(password) if !password.is_empty() => PasswordChange::Replace(password.to_string()),
            _ => PasswordChange::Keep,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccountUpdate {
    pub account: Account,
    pub password: PasswordChange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_password_keeps_existing() {
        assert_eq!(PasswordChange::from_input(None), PasswordChange::Keep);
        assert_eq!(PasswordChange::from_input(Some("")), PasswordChange::Keep);
    }

    #[test]
    fn non_blank_password_replaces_existing() {
        assert_eq!(
            PasswordChange::from_input(Some("s3cret")),
            PasswordChange::Replace("s3cret".to_string())
        );
    }
}
