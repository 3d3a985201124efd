use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::account::{Account, Profile};
use crate::domain::catalog::{Category, Item, Product};
use crate::domain::errors::DomainError;
use crate::domain::order::{LineItem, Order};
use crate::domain::ports::{
    AccountMapper, CategoryMapper, ItemMapper, LineItemMapper, Mappers, OrderMapper,
    ProductMapper, SequenceMapper, Store,
};
use crate::domain::sequence::Sequence;

/// Committed state of a [`MemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct Tables {
    sequences: BTreeMap<String, i32>,
    categories: BTreeMap<String, Category>,
    products: BTreeMap<String, Product>,
    items: BTreeMap<String, Item>,
    inventory: BTreeMap<String, i32>,
    accounts: BTreeMap<String, Account>,
    profiles: BTreeMap<String, Profile>,
    signons: BTreeMap<String, String>,
    orders: BTreeMap<i32, Order>,
    order_statuses: BTreeMap<i32, String>,
    line_items: BTreeMap<(i32, i32), LineItem>,
}

/// In-process store. Each transaction works on a copy of the tables that
/// replaces the committed state only when the closure succeeds; transactions
/// run one at a time. Read-only transactions reject writes and counter reads.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequence(self, name: &str, next_id: i32) -> Self {
        self.seed(|t| {
            t.sequences.insert(name.to_string(), next_id);
        })
    }

    pub fn with_category(self, category: Category) -> Self {
        self.seed(|t| {
            t.categories.insert(category.category_id.clone(), category);
        })
    }

    pub fn with_product(self, product: Product) -> Self {
        self.seed(|t| {
            t.products.insert(product.product_id.clone(), product);
        })
    }

    /// Adds the item with an inventory row holding `item.quantity`.
    pub fn with_item(self, item: Item) -> Self {
        self.seed(|t| {
            t.inventory.insert(item.item_id.clone(), item.quantity);
            t.items.insert(item.item_id.clone(), item);
        })
    }

    fn seed(self, f: impl FnOnce(&mut Tables)) -> Self {
        f(&mut *self.tables.lock().expect("tables poisoned"));
        self
    }
}

impl Store for MemoryStore {
    fn transaction<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn Mappers) -> Result<T, DomainError>,
    {
        let mut committed = self
            .tables
            .lock()
            .map_err(|_| DomainError::Storage("in-memory tables are poisoned".to_string()))?;
        let mut working = committed.clone();
        let value = f(&mut working)?;
        *committed = working;
        Ok(value)
    }

    fn read_only<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn Mappers) -> Result<T, DomainError>,
    {
        let mut committed = self
            .tables
            .lock()
            .map_err(|_| DomainError::Storage("in-memory tables are poisoned".to_string()))?;
        f(&mut ReadOnly(&mut *committed))
    }
}

/// The tables as seen from a read-only transaction: plain reads pass through,
/// while writes and locking reads fail the way Postgres rejects them.
struct ReadOnly<'a>(&'a mut Tables);

fn read_only_violation(operation: &str) -> DomainError {
    DomainError::Storage(format!("cannot execute {operation} in a read-only transaction"))
}

impl SequenceMapper for ReadOnly<'_> {
    fn get_sequence(&mut self, _name: &str) -> Result<Option<Sequence>, DomainError> {
        Err(read_only_violation("SELECT FOR UPDATE"))
    }

    fn update_sequence(&mut self, _sequence: &Sequence) -> Result<(), DomainError> {
        Err(read_only_violation("UPDATE"))
    }
}

impl CategoryMapper for ReadOnly<'_> {
    fn get_category_list(&mut self) -> Result<Vec<Category>, DomainError> {
        self.0.get_category_list()
    }

    fn get_category(&mut self, category_id: &str) -> Result<Option<Category>, DomainError> {
        self.0.get_category(category_id)
    }
}

impl ProductMapper for ReadOnly<'_> {
    fn get_product(&mut self, product_id: &str) -> Result<Option<Product>, DomainError> {
        self.0.get_product(product_id)
    }

    fn get_product_list_by_category(
        &mut self,
        category_id: &str,
    ) -> Result<Vec<Product>, DomainError> {
        self.0.get_product_list_by_category(category_id)
    }

    fn search_product_list(&mut self, keyword: &str) -> Result<Vec<Product>, DomainError> {
        self.0.search_product_list(keyword)
    }
}

impl ItemMapper for ReadOnly<'_> {
    fn get_item_list_by_product(&mut self, product_id: &str) -> Result<Vec<Item>, DomainError> {
        self.0.get_item_list_by_product(product_id)
    }

    fn get_item(&mut self, item_id: &str) -> Result<Option<Item>, DomainError> {
        self.0.get_item(item_id)
    }

    fn get_inventory_quantity(&mut self, item_id: &str) -> Result<Option<i32>, DomainError> {
        self.0.get_inventory_quantity(item_id)
    }

    fn update_inventory_quantity(
        &mut self,
        _item_id: &str,
        _increment: i32,
    ) -> Result<(), DomainError> {
        Err(read_only_violation("UPDATE"))
    }
}

impl OrderMapper for ReadOnly<'_> {
    fn insert_order(&mut self, _order: &Order) -> Result<(), DomainError> {
        Err(read_only_violation("INSERT"))
    }

    fn insert_order_status(&mut self, _order: &Order) -> Result<(), DomainError> {
        Err(read_only_violation("INSERT"))
    }

    fn get_order(&mut self, order_id: i32) -> Result<Option<Order>, DomainError> {
        self.0.get_order(order_id)
    }

    fn get_orders_by_username(&mut self, username: &str) -> Result<Vec<Order>, DomainError> {
        self.0.get_orders_by_username(username)
    }
}

impl LineItemMapper for ReadOnly<'_> {
    fn insert_line_item(&mut self, _line_item: &LineItem) -> Result<(), DomainError> {
        Err(read_only_violation("INSERT"))
    }

    fn get_line_items_by_order_id(&mut self, order_id: i32) -> Result<Vec<LineItem>, DomainError> {
        self.0.get_line_items_by_order_id(order_id)
    }
}

impl AccountMapper for ReadOnly<'_> {
    fn get_account_by_username(&mut self, username: &str) -> Result<Option<Account>, DomainError> {
        self.0.get_account_by_username(username)
    }

    fn get_account_by_username_and_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError> {
        self.0.get_account_by_username_and_password(username, password)
    }

    fn insert_account(&mut self, _account: &Account) -> Result<(), DomainError> {
        Err(read_only_violation("INSERT"))
    }

    fn insert_profile(&mut self, _account: &Account) -> Result<(), DomainError> {
        Err(read_only_violation("INSERT"))
    }

    fn insert_signon(&mut self, _username: &str, _password: &str) -> Result<(), DomainError> {
        Err(read_only_violation("INSERT"))
    }

    fn update_account(&mut self, _account: &Account) -> Result<(), DomainError> {
        Err(read_only_violation("UPDATE"))
    }

    fn update_profile(&mut self, _account: &Account) -> Result<(), DomainError> {
        Err(read_only_violation("UPDATE"))
    }

    fn update_signon(&mut self, _username: &str, _password: &str) -> Result<(), DomainError> {
        Err(read_only_violation("UPDATE"))
    }
}

fn duplicate(table: &str, key: impl std::fmt::Display) -> DomainError {
    DomainError::Storage(format!("duplicate key {key} in {table}"))
}

fn no_row(table: &str, key: impl std::fmt::Display) -> DomainError {
    DomainError::Storage(format!("no row in {table} for {key}"))
}

impl SequenceMapper for Tables {
    fn get_sequence(&mut self, name: &str) -> Result<Option<Sequence>, DomainError> {
        Ok(self.sequences.get(name).map(|&next_id| Sequence {
            name: name.to_string(),
            next_id,
        }))
    }

    fn update_sequence(&mut self, sequence: &Sequence) -> Result<(), DomainError> {
        let row = self
            .sequences
            .get_mut(&sequence.name)
            .ok_or_else(|| no_row("sequence", &sequence.name))?;
        *row = sequence.next_id;
        Ok(())
    }
}

impl CategoryMapper for Tables {
    fn get_category_list(&mut self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.values().cloned().collect())
    }

    fn get_category(&mut self, category_id: &str) -> Result<Option<Category>, DomainError> {
        Ok(self.categories.get(category_id).cloned())
    }
}

impl ProductMapper for Tables {
    fn get_product(&mut self, product_id: &str) -> Result<Option<Product>, DomainError> {
        Ok(self.products.get(product_id).cloned())
    }

    fn get_product_list_by_category(
        &mut self,
        category_id: &str,
    ) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    fn search_product_list(&mut self, keyword: &str) -> Result<Vec<Product>, DomainError> {
        let keyword = keyword.to_lowercase();
        Ok(self
            .products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&keyword))
            .cloned()
            .collect())
    }
}

impl ItemMapper for Tables {
    fn get_item_list_by_product(&mut self, product_id: &str) -> Result<Vec<Item>, DomainError> {
        let items: Vec<Item> = self
            .items
            .values()
            .filter(|i| i.product_id == product_id)
            .cloned()
            .collect();
        Ok(items
            .into_iter()
            .map(|mut item| {
                item.quantity = self.inventory.get(&item.item_id).copied().unwrap_or(0);
                item
            })
            .collect())
    }

    fn get_item(&mut self, item_id: &str) -> Result<Option<Item>, DomainError> {
        Ok(self.items.get(item_id).map(|item| Item {
            quantity: self.inventory.get(item_id).copied().unwrap_or(0),
            ..item.clone()
        }))
    }

    fn get_inventory_quantity(&mut self, item_id: &str) -> Result<Option<i32>, DomainError> {
        Ok(self.inventory.get(item_id).copied())
    }

    fn update_inventory_quantity(
        &mut self,
        item_id: &str,
        increment: i32,
    ) -> Result<(), DomainError> {
        let quantity = self
            .inventory
            .get_mut(item_id)
            .ok_or_else(|| no_row("inventory", item_id))?;
        *quantity = quantity
            .checked_add(increment)
            .ok_or_else(|| DomainError::Storage(format!("inventory overflow for {item_id}")))?;
        Ok(())
    }
}

impl OrderMapper for Tables {
    fn insert_order(&mut self, order: &Order) -> Result<(), DomainError> {
        if self.orders.contains_key(&order.order_id) {
            return Err(duplicate("orders", order.order_id));
        }
        let header = Order {
            line_items: Vec::new(),
            ..order.clone()
        };
        self.orders.insert(order.order_id, header);
        Ok(())
    }

    fn insert_order_status(&mut self, order: &Order) -> Result<(), DomainError> {
        if !self.orders.contains_key(&order.order_id) {
            return Err(no_row("orders", order.order_id));
        }
        if self.order_statuses.contains_key(&order.order_id) {
            return Err(duplicate("order_status", order.order_id));
        }
        self.order_statuses
            .insert(order.order_id, order.status.clone());
        Ok(())
    }

    fn get_order(&mut self, order_id: i32) -> Result<Option<Order>, DomainError> {
        let Some(order) = self.orders.get(&order_id) else {
            return Ok(None);
        };
        let Some(status) = self.order_statuses.get(&order_id) else {
            return Ok(None);
        };
        Ok(Some(Order {
            status: status.clone(),
            ..order.clone()
        }))
    }

    fn get_orders_by_username(&mut self, username: &str) -> Result<Vec<Order>, DomainError> {
        Ok(self
            .orders
            .values()
            .filter(|o| o.username == username)
            .filter_map(|o| {
                self.order_statuses.get(&o.order_id).map(|status| Order {
                    status: status.clone(),
                    ..o.clone()
                })
            })
            .collect())
    }
}

impl LineItemMapper for Tables {
    fn insert_line_item(&mut self, line_item: &LineItem) -> Result<(), DomainError> {
        let key = (line_item.order_id, line_item.line_number);
        if !self.orders.contains_key(&line_item.order_id) {
            return Err(no_row("orders", line_item.order_id));
        }
        if !self.items.contains_key(&line_item.item_id) {
            return Err(no_row("item", &line_item.item_id));
        }
        if self.line_items.contains_key(&key) {
            return Err(duplicate("line_item", format!("{key:?}")));
        }
        let row = LineItem {
            item: None,
            ..line_item.clone()
        };
        self.line_items.insert(key, row);
        Ok(())
    }

    fn get_line_items_by_order_id(&mut self, order_id: i32) -> Result<Vec<LineItem>, DomainError> {
        Ok(self
            .line_items
            .range((order_id, i32::MIN)..=(order_id, i32::MAX))
            .map(|(_, line)| line.clone())
            .collect())
    }
}

impl AccountMapper for Tables {
    fn get_account_by_username(&mut self, username: &str) -> Result<Option<Account>, DomainError> {
        let Some(account) = self.accounts.get(username) else {
            return Ok(None);
        };
        let Some(profile) = self.profiles.get(username) else {
            return Ok(None);
        };
        Ok(Some(Account {
            profile: profile.clone(),
            ..account.clone()
        }))
    }

    fn get_account_by_username_and_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError> {
        match self.signons.get(username) {
            Some(stored) if stored == password => self.get_account_by_username(username),
            _ => Ok(None),
        }
    }

    fn insert_account(&mut self, account: &Account) -> Result<(), DomainError> {
        if self.accounts.contains_key(&account.username) {
            return Err(duplicate("account", &account.username));
        }
        self.accounts
            .insert(account.username.clone(), account.clone());
        Ok(())
    }

    fn insert_profile(&mut self, account: &Account) -> Result<(), DomainError> {
        if !self.accounts.contains_key(&account.username) {
            return Err(no_row("account", &account.username));
        }
        if self.profiles.contains_key(&account.username) {
            return Err(duplicate("profile", &account.username));
        }
        self.profiles
            .insert(account.username.clone(), account.profile.clone());
        Ok(())
    }

    fn insert_signon(&mut self, username: &str, password: &str) -> Result<(), DomainError> {
        if !self.accounts.contains_key(username) {
            return Err(no_row("account", username));
        }
        if self.signons.contains_key(username) {
            return Err(duplicate("signon", username));
        }
        self.signons
            .insert(username.to_string(), password.to_string());
        Ok(())
    }

    fn update_account(&mut self, account: &Account) -> Result<(), DomainError> {
        let row = self
            .accounts
            .get_mut(&account.username)
            .ok_or_else(|| no_row("account", &account.username))?;
        *row = account.clone();
        Ok(())
    }

    fn update_profile(&mut self, account: &Account) -> Result<(), DomainError> {
        let row = self
            .profiles
            .get_mut(&account.username)
            .ok_or_else(|| no_row("profile", &account.username))?;
        *row = account.profile.clone();
        Ok(())
    }

    fn update_signon(&mut self, username: &str, password: &str) -> Result<(), DomainError> {
        let row = self
            .signons
            .get_mut(username)
            .ok_or_else(|| no_row("signon", username))?;
        *row = password.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_transaction_leaves_tables_untouched() {
        let store = MemoryStore::new().with_sequence("ordernum", 1000);

        let result: Result<(), DomainError> = store.transaction(|m| {
            m.update_sequence(&Sequence {
                name: "ordernum".to_string(),
                next_id: 1001,
            })?;
            Err(DomainError::Storage("boom".to_string()))
        });
        assert!(result.is_err());

        let current = store
            .transaction(|m| m.get_sequence("ordernum"))
            .unwrap()
            .unwrap();
        assert_eq!(current.next_id, 1000);
    }

    #[test]
    fn read_only_rejects_writes_and_counter_reads() {
        let store = MemoryStore::new().with_sequence("ordernum", 1000);

        let write = store
            .read_only(|m| {
                m.update_sequence(&Sequence {
                    name: "ordernum".to_string(),
                    next_id: 5000,
                })
            })
            .unwrap_err();
        let locking_read = store
            .read_only(|m| m.get_sequence("ordernum"))
            .unwrap_err();

        assert!(matches!(write, DomainError::Storage(msg) if msg.contains("read-only")));
        assert!(matches!(locking_read, DomainError::Storage(msg) if msg.contains("read-only")));
        let current = store
            .transaction(|m| m.get_sequence("ordernum"))
            .unwrap()
            .unwrap();
        assert_eq!(current.next_id, 1000);
    }

    #[test]
    fn read_only_serves_plain_reads() {
        let store = MemoryStore::new().with_sequence("ordernum", 1000);

        let orders = store.read_only(|m| m.get_orders_by_username("j2ee")).unwrap();

        assert!(orders.is_empty());
    }

    #[test]
    #[should_panic(expected = "tables poisoned")]
    fn seeding_a_poisoned_store_panics() {
        let store = MemoryStore::new();
        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.tables.lock().unwrap();
            panic!("writer died");
        })
        .join();

        let _ = store.with_sequence("ordernum", 1000);
    }

    #[test]
    fn updating_a_missing_row_fails() {
        let store = MemoryStore::new();

        let err = store
            .transaction(|m| m.update_inventory_quantity("EST-404", 1))
            .unwrap_err();

        assert!(matches!(err, DomainError::Storage(msg) if msg.contains("EST-404")));
    }
}
