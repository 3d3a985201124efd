use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
}

/// A sellable catalog item. `quantity` is the inventory level at the time the
/// item was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub product_id: String,
    pub list_price: BigDecimal,
    pub unit_cost: BigDecimal,
    pub status: Option<String>,
    pub attribute1: Option<String>,
    pub quantity: i32,
}
