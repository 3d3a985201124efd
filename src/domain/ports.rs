use super::account::Account;
use super::catalog::{Category, Item, Product};
use super::errors::DomainError;
use super::order::{LineItem, Order};
use super::sequence::Sequence;

/// Named counters.
pub trait SequenceMapper {
    /// Reads the counter row and holds it against other writers until the
    /// current transaction ends, so it needs a read-write transaction.
    fn get_sequence(&mut self, name: &str) -> Result<Option<Sequence>, DomainError>;
    fn update_sequence(&mut self, sequence: &Sequence) -> Result<(), DomainError>;
}

pub trait CategoryMapper {
    fn get_category_list(&mut self) -> Result<Vec<Category>, DomainError>;
    fn get_category(&mut self, category_id: &str) -> Result<Option<Category>, DomainError>;
}

pub trait ProductMapper {
    fn get_product(&mut self, product_id: &str) -> Result<Option<Product>, DomainError>;
    fn get_product_list_by_category(
        &mut self,
        category_id: &str,
    ) -> Result<Vec<Product>, DomainError>;
    /// Products whose name contains `keyword`, ignoring case.
    fn search_product_list(&mut self, keyword: &str) -> Result<Vec<Product>, DomainError>;
}

pub trait ItemMapper {
    fn get_item_list_by_product(&mut self, product_id: &str) -> Result<Vec<Item>, DomainError>;
    fn get_item(&mut self, item_id: &str) -> Result<Option<Item>, DomainError>;
    fn get_inventory_quantity(&mut self, item_id: &str) -> Result<Option<i32>, DomainError>;
    /// Adds `increment` to the stored inventory. Fails if the item has no
    /// inventory row.
    fn update_inventory_quantity(&mut self, item_id: &str, increment: i32)
        -> Result<(), DomainError>;
}

pub trait OrderMapper {
    fn insert_order(&mut self, order: &Order) -> Result<(), DomainError>;
    fn insert_order_status(&mut self, order: &Order) -> Result<(), DomainError>;
    /// The order header with its status; line items are left empty.
    fn get_order(&mut self, order_id: i32) -> Result<Option<Order>, DomainError>;
    fn get_orders_by_username(&mut self, username: &str) -> Result<Vec<Order>, DomainError>;
}

pub trait LineItemMapper {
    fn insert_line_item(&mut self, line_item: &LineItem) -> Result<(), DomainError>;
    /// Line items ordered by line number.
    fn get_line_items_by_order_id(&mut self, order_id: i32) -> Result<Vec<LineItem>, DomainError>;
}

pub trait AccountMapper {
    fn get_account_by_username(&mut self, username: &str) -> Result<Option<Account>, DomainError>;
    fn get_account_by_username_and_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError>;
    fn insert_account(&mut self, account: &Account) -> Result<(), DomainError>;
    fn insert_profile(&mut self, account: &Account) -> Result<(), DomainError>;
    fn insert_signon(&mut self, username: &str, password: &str) -> Result<(), DomainError>;
    fn update_account(&mut self, account: &Account) -> Result<(), DomainError>;
    fn update_profile(&mut self, account: &Account) -> Result<(), DomainError>;
    fn update_signon(&mut self, username: &str, password: &str) -> Result<(), DomainError>;
}

/// Every mapper, bound to one open transaction.
pub trait Mappers:
    SequenceMapper
    + CategoryMapper
    + ProductMapper
    + ItemMapper
    + OrderMapper
    + LineItemMapper
    + AccountMapper
{
}

impl<T> Mappers for T where
    T: SequenceMapper
        + CategoryMapper
        + ProductMapper
        + ItemMapper
        + OrderMapper
        + LineItemMapper
        + AccountMapper
        + ?Sized
{
}

/// Transaction boundary. The closure's mapper calls commit together when it
/// returns `Ok` and are rolled back when it returns `Err`.
pub trait Store: Send + Sync + 'static {
    fn transaction<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn Mappers) -> Result<T, DomainError>;

    /// Runs `f` against a consistent snapshot for reads only.
    fn read_only<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn Mappers) -> Result<T, DomainError>,
    {
        self.transaction(f)
    }
}
