use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::account::{Account, Profile};
use crate::domain::address::Address;
use crate::domain::catalog::{Category, Item, Product};
use crate::domain::order::{Contact, LineItem, Order, Payment};
use crate::domain::sequence::Sequence;
use crate::schema::{
    account, category, inventory, item, line_item, order_status, orders, product, profile,
    sequence, signon,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sequence)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SequenceRow {
    pub name: String,
    pub next_id: i32,
}

impl From<SequenceRow> for Sequence {
    fn from(row: SequenceRow) -> Self {
        Sequence {
            name: row.name,
            next_id: row.next_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = category)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            category_id: row.category_id,
            name: row.name,
            description: row.description,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = product)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub product_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: row.product_id,
            category_id: row.category_id,
            name: row.name,
            description: row.description,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = item)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    pub item_id: String,
    pub product_id: String,
    pub list_price: BigDecimal,
    pub unit_cost: BigDecimal,
    pub status: Option<String>,
    pub attribute1: Option<String>,
}

impl ItemRow {
    /// Items without an inventory row read as out of stock.
    pub fn into_item(self, quantity: Option<i32>) -> Item {
        Item {
            item_id: self.item_id,
            product_id: self.product_id,
            list_price: self.list_price,
            unit_cost: self.unit_cost,
            status: self.status,
            attribute1: self.attribute1,
            quantity: quantity.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = inventory)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InventoryRow {
    pub item_id: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub order_id: i32,
    pub username: String,
    pub order_date: DateTime<Utc>,
    pub ship_address1: String,
    pub ship_address2: Option<String>,
    pub ship_city: String,
    pub ship_state: String,
    pub ship_zip: String,
    pub ship_country: String,
    pub bill_address1: String,
    pub bill_address2: Option<String>,
    pub bill_city: String,
    pub bill_state: String,
    pub bill_zip: String,
    pub bill_country: String,
    pub courier: String,
    pub total_price: BigDecimal,
    pub bill_to_first_name: String,
    pub bill_to_last_name: String,
    pub ship_to_first_name: String,
    pub ship_to_last_name: String,
    pub credit_card: String,
    pub expiry_date: String,
    pub card_type: String,
    pub locale: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        let ship = &order.ship_to.address;
        let bill = &order.bill_to.address;
        OrderRow {
            order_id: order.order_id,
            username: order.username.clone(),
            order_date: order.order_date,
            ship_address1: ship.address1.clone(),
            ship_address2: ship.address2.clone(),
            ship_city: ship.city.clone(),
            ship_state: ship.state.clone(),
            ship_zip: ship.zip.clone(),
            ship_country: ship.country.clone(),
            bill_address1: bill.address1.clone(),
            bill_address2: bill.address2.clone(),
            bill_city: bill.city.clone(),
            bill_state: bill.state.clone(),
            bill_zip: bill.zip.clone(),
            bill_country: bill.country.clone(),
            courier: order.courier.clone(),
            total_price: order.total_price.clone(),
            bill_to_first_name: order.bill_to.first_name.clone(),
            bill_to_last_name: order.bill_to.last_name.clone(),
            ship_to_first_name: order.ship_to.first_name.clone(),
            ship_to_last_name: order.ship_to.last_name.clone(),
            credit_card: order.payment.credit_card.clone(),
            expiry_date: order.payment.expiry_date.clone(),
            card_type: order.payment.card_type.clone(),
            locale: order.locale.clone(),
        }
    }
}

impl OrderRow {
    pub fn into_order(self, status: String) -> Order {
        Order {
            order_id: self.order_id,
            username: self.username,
            order_date: self.order_date,
            ship_to: Contact {
                first_name: self.ship_to_first_name,
                last_name: self.ship_to_last_name,
                address: Address {
                    address1: self.ship_address1,
                    address2: self.ship_address2,
                    city: self.ship_city,
                    state: self.ship_state,
                    zip: self.ship_zip,
                    country: self.ship_country,
                },
            },
            bill_to: Contact {
                first_name: self.bill_to_first_name,
                last_name: self.bill_to_last_name,
                address: Address {
                    address1: self.bill_address1,
                    address2: self.bill_address2,
                    city: self.bill_city,
                    state: self.bill_state,
                    zip: self.bill_zip,
                    country: self.bill_country,
                },
            },
            courier: self.courier,
            total_price: self.total_price,
            payment: Payment {
                credit_card: self.credit_card,
                expiry_date: self.expiry_date,
                card_type: self.card_type,
            },
            locale: self.locale,
            status,
            line_items: Vec::new(),
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_status)]
pub struct NewOrderStatusRow {
    pub order_id: i32,
    pub line_number: i32,
    pub changed_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = line_item)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LineItemRow {
    pub order_id: i32,
    pub line_number: i32,
    pub item_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

impl From<&LineItem> for LineItemRow {
    fn from(line: &LineItem) -> Self {
        LineItemRow {
            order_id: line.order_id,
            line_number: line.line_number,
            item_id: line.item_id.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.clone(),
        }
    }
}

impl From<LineItemRow> for LineItem {
    fn from(row: LineItemRow) -> Self {
        LineItem {
            order_id: row.order_id,
            line_number: row.line_number,
            item_id: row.item_id,
            quantity: row.quantity,
            unit_price: row.unit_price,
            item: None,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = account)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        AccountRow {
            username: account.username.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            status: account.status.clone(),
            address1: account.address.address1.clone(),
            address2: account.address.address2.clone(),
            city: account.address.city.clone(),
            state: account.address.state.clone(),
            zip: account.address.zip.clone(),
            country: account.address.country.clone(),
            phone: account.phone.clone(),
        }
    }
}

impl AccountRow {
    pub fn into_account(self, profile: ProfileRow) -> Account {
        Account {
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            status: self.status,
            address: Address {
                address1: self.address1,
                address2: self.address2,
                city: self.city,
                state: self.state,
                zip: self.zip,
                country: self.country,
            },
            phone: self.phone,
            profile: Profile {
                language_preference: profile.language_preference,
                favourite_category_id: profile.favourite_category_id,
                list_option: profile.list_option,
                banner_option: profile.banner_option,
            },
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = profile)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    pub username: String,
    pub language_preference: String,
    pub favourite_category_id: Option<String>,
    pub list_option: bool,
    pub banner_option: bool,
}

impl From<&Account> for ProfileRow {
    fn from(account: &Account) -> Self {
        ProfileRow {
            username: account.username.clone(),
            language_preference: account.profile.language_preference.clone(),
            favourite_category_id: account.profile.favourite_category_id.clone(),
            list_option: account.profile.list_option,
            banner_option: account.profile.banner_option,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = signon)]
pub struct NewSignonRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
