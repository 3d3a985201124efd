use diesel::prelude::*;

use crate::domain::account::Account;
use crate::domain::errors::DomainError;
use crate::domain::ports::AccountMapper;
use crate::schema::{account, profile, signon};

use super::models::{AccountRow, NewSignonRow, ProfileRow};
use super::pg_store::{expect_row, PgMappers};

impl AccountMapper for PgMappers<'_> {
    fn get_account_by_username(&mut self, username: &str) -> Result<Option<Account>, DomainError> {
        let row: Option<(AccountRow, ProfileRow)> = account::table
            .inner_join(profile::table)
            .filter(account::username.eq(username))
            .select((AccountRow::as_select(), ProfileRow::as_select()))
            .first(self.conn)
            .optional()?;
        Ok(row.map(|(account, profile)| account.into_account(profile)))
    }

    fn get_account_by_username_and_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError> {
        let matched = signon::table
            .filter(signon::username.eq(username))
            .filter(signon::password.eq(password))
            .select(signon::username)
            .first::<String>(self.conn)
            .optional()?;
        if matched.is_none() {
            return Ok(None);
        }
        self.get_account_by_username(username)
    }

    fn insert_account(&mut self, account: &Account) -> Result<(), DomainError> {
        diesel::insert_into(account::table)
            .values(&AccountRow::from(account))
            .execute(self.conn)?;
        Ok(())
    }

    fn insert_profile(&mut self, account: &Account) -> Result<(), DomainError> {
        diesel::insert_into(profile::table)
            .values(&ProfileRow::from(account))
            .execute(self.conn)?;
        Ok(())
    }

    fn insert_signon(&mut self, username: &str, password: &str) -> Result<(), DomainError> {
        diesel::insert_into(signon::table)
            .values(&NewSignonRow { username, password })
            .execute(self.conn)?;
        Ok(())
    }

    fn update_account(&mut self, a: &Account) -> Result<(), DomainError> {
        let affected = diesel::update(account::table.find(&a.username))
            .set((
                account::email.eq(&a.email),
                account::first_name.eq(&a.first_name),
                account::last_name.eq(&a.last_name),
                account::status.eq(&a.status),
                account::address1.eq(&a.address.address1),
                account::address2.eq(&a.address.address2),
                account::city.eq(&a.address.city),
                account::state.eq(&a.address.state),
                account::zip.eq(&a.address.zip),
                account::country.eq(&a.address.country),
                account::phone.eq(&a.phone),
            ))
            .execute(self.conn)?;
        expect_row(affected, "account", &a.username)
    }

    fn update_profile(&mut self, a: &Account) -> Result<(), DomainError> {
        let affected = diesel::update(profile::table.find(&a.username))
            .set((
                profile::language_preference.eq(&a.profile.language_preference),
                profile::favourite_category_id.eq(&a.profile.favourite_category_id),
                profile::list_option.eq(a.profile.list_option),
                profile::banner_option.eq(a.profile.banner_option),
            ))
            .execute(self.conn)?;
        expect_row(affected, "profile", &a.username)
    }

    fn update_signon(&mut self, username: &str, password: &str) -> Result<(), DomainError> {
        let affected = diesel::update(signon::table.find(username))
            .set(signon::password.eq(password))
            .execute(self.conn)?;
        expect_row(affected, "signon", username)
    }
}

#[cfg(test)]
mod tests {
    use crate::application::account_service::AccountService;
    use crate::domain::account::{Account, AccountUpdate, NewAccount, PasswordChange, Profile};
    use crate::domain::order::fixtures::address;
    use crate::infrastructure::pg_store::PgStore;
    use crate::infrastructure::test_support::setup_db;

    fn account() -> Account {
        Account {
            username: "j2ee".to_string(),
            email: "yourname@yourdomain.com".to_string(),
            first_name: "ABC".to_string(),
            last_name: "XYX".to_string(),
            status: None,
            address: address(),
            phone: "555-555-5555".to_string(),
            profile: Profile {
                language_preference: "english".to_string(),
                favourite_category_id: None,
                list_option: false,
                banner_option: true,
            },
        }
    }

    #[tokio::test]
    async fn insert_get_and_partial_update() {
        let (_container, pool) = setup_db().await;
        let service = AccountService::new(PgStore::new(pool));

        service
            .insert_account(NewAccount {
                account: account(),
                password: "j2ee".to_string(),
            })
            .expect("insert failed");
        assert_eq!(service.get_account("j2ee").expect("get failed"), Some(account()));

        let mut changed = account();
        changed.phone = "555-000-0000".to_string();
        changed.profile.favourite_category_id = Some("FISH".to_string());
        service
            .update_account(AccountUpdate {
                account: changed.clone(),
                password: PasswordChange::from_input(None),
            })
            .expect("update failed");

        assert_eq!(
            service
                .get_account_with_password("j2ee", "j2ee")
                .expect("lookup failed"),
            Some(changed.clone())
        );

        service
            .update_account(AccountUpdate {
                account: changed,
                password: PasswordChange::from_input(Some("n3w")),
            })
            .expect("update failed");

        assert!(service
            .get_account_with_password("j2ee", "j2ee")
            .expect("lookup failed")
            .is_none());
        assert!(service
            .get_account_with_password("j2ee", "n3w")
            .expect("lookup failed")
            .is_some());
    }
}
