use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::catalog::Item;
use super::errors::DomainError;

/// Status recorded for a freshly placed order.
pub const INITIAL_ORDER_STATUS: &str = "P";

/// Status rows for the order as a whole use line number 0.
pub const ORDER_STATUS_LINE_NUMBER: i32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub credit_card: String,
    /// `MM/YYYY`
    pub expiry_date: String,
    pub card_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub item_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

impl NewLineItem {
    pub fn total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }

    /// Attach the line item to its placed order.
    pub fn stamp(self, order_id: i32, line_number: i32) -> LineItem {
        LineItem {
            order_id,
            line_number,
            item_id: self.item_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            item: None,
        }
    }
}

/// An order as submitted by a customer, before it has an order number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub username: String,
    pub order_date: DateTime<Utc>,
    pub ship_to: Contact,
    pub bill_to: Contact,
    pub courier: String,
    pub payment: Payment,
    pub locale: String,
    pub line_items: Vec<NewLineItem>,
}

impl NewOrder {
    pub fn total_price(&self) -> BigDecimal {
        self.line_items.iter().map(NewLineItem::total).sum()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.line_items.is_empty() {
            return Err(DomainError::InvalidInput(
                "an order needs at least one line item".to_string(),
            ));
        }
        if let Some(line) = self.line_items.iter().find(|l| l.quantity <= 0) {
            return Err(DomainError::InvalidInput(format!(
                "quantity for item '{}' must be positive, got {}",
                line.item_id, line.quantity
            )));
        }
        Ok(())
    }

    /// Split into the order header stamped with `order_id` and the line items
    /// still waiting to be persisted.
    pub fn into_header(self, order_id: i32) -> (Order, Vec<NewLineItem>) {
        let total_price = self.total_price();
        let order = Order {
            order_id,
            username: self.username,
            order_date: self.order_date,
            ship_to: self.ship_to,
            bill_to: self.bill_to,
            courier: self.courier,
            total_price,
            payment: self.payment,
            locale: self.locale,
            status: INITIAL_ORDER_STATUS.to_string(),
            line_items: Vec::with_capacity(self.line_items.len()),
        };
        (order, self.line_items)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub order_id: i32,
    pub line_number: i32,
    pub item_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    /// Attached when an order is read back; never persisted.
    pub item: Option<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i32,
    pub username: String,
    pub order_date: DateTime<Utc>,
    pub ship_to: Contact,
    pub bill_to: Contact,
    pub courier: String,
    pub total_price: BigDecimal,
    pub payment: Payment,
    pub locale: String,
    pub status: String,
    pub line_items: Vec<LineItem>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    pub fn address() -> Address {
        Address {
            address1: "901 San Antonio Road".to_string(),
            address2: Some("MS UCUP02-206".to_string()),
            city: "Palo Alto".to_string(),
            state: "CA".to_string(),
            zip: "94303".to_string(),
            country: "USA".to_string(),
        }
    }

    pub fn line(item_id: &str, quantity: i32, price: &str) -> NewLineItem {
        NewLineItem {
            item_id: item_id.to_string(),
            quantity,
            unit_price: BigDecimal::from_str(price).expect("valid decimal"),
        }
    }

    pub fn new_order(username: &str, line_items: Vec<NewLineItem>) -> NewOrder {
        let contact = Contact {
            first_name: "ABC".to_string(),
            last_name: "XYX".to_string(),
            address: address(),
        };
        NewOrder {
            username: username.to_string(),
            order_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            ship_to: contact.clone(),
            bill_to: contact,
            courier: "UPS".to_string(),
            payment: Payment {
                credit_card: "999 9999 9999 9999".to_string(),
                expiry_date: "12/2030".to_string(),
                card_type: "Visa".to_string(),
            },
            locale: "CA".to_string(),
            line_items,
        }
    }
}
