use crate::domain::account::{Account, AccountUpdate, NewAccount, PasswordChange};
use crate::domain::errors::DomainError;
use crate::domain::ports::{AccountMapper, Store};

pub struct AccountService<S> {
    store: S,
}

impl<S: Store> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_account(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.store.read_only(|m| m.get_account_by_username(username))
    }

    pub fn get_account_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError> {
        self.store
            .read_only(|m| m.get_account_by_username_and_password(username, password))
    }

    /// Creates the account, profile and signon rows together.
    pub fn insert_account(&self, new: NewAccount) -> Result<(), DomainError> {
        if new.password.is_empty() {
            return Err(DomainError::InvalidInput(
                "a new account needs a password".to_string(),
            ));
        }
        self.store.transaction(|m| {
            m.insert_account(&new.account)?;
            m.insert_profile(&new.account)?;
            m.insert_signon(&new.account.username, &new.password)
        })?;
        log::info!("Created account '{}'", new.account.username);
        Ok(())
    }

    /// Rewrites account and profile; the password only when a replacement
    /// was supplied.
    pub fn update_account(&self, update: AccountUpdate) -> Result<(), DomainError> {
        self.store.transaction(|m| {
            m.update_account(&update.account)?;
            m.update_profile(&update.account)?;
            if let PasswordChange::Replace(password) = &update.password {
                m.update_signon(&update.account.username, password)?;
            }
            Ok(())
        })?;
        log::info!("Updated account '{}'", update.account.username);
        Ok(())
    }
}
