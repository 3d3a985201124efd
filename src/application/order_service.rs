use crate::application::sequence::SequenceGenerator;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order};
use crate::domain::ports::{ItemMapper, LineItemMapper, Mappers, OrderMapper, Store};
use crate::domain::sequence::ORDER_SEQUENCE;

/// Order placement and retrieval. Every call runs in exactly one store
/// transaction.
pub struct OrderService<S> {
    store: S,
}

impl<S: Store> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Assigns an order number, adjusts inventory and persists the order with
    /// its status and line items. Nothing is kept if any step fails.
    pub fn place_order(&self, draft: NewOrder) -> Result<Order, DomainError> {
        draft.validate()?;
        let username = draft.username.clone();

        match self.store.transaction(move |m| place(m, draft)) {
            Ok(order) => {
                log::info!(
                    "Placed order {} for '{}' with {} line item(s)",
                    order.order_id,
                    order.username,
                    order.line_items.len()
                );
                Ok(order)
            }
            Err(e) => {
                log::warn!("Order placement for '{}' rolled back: {}", username, e);
                Err(e)
            }
        }
    }

    /// The order with its line items, each carrying the item and its current
    /// stock level.
    pub fn get_order(&self, order_id: i32) -> Result<Order, DomainError> {
        self.store.read_only(|m| assemble(m, order_id))
    }

    pub fn get_orders_by_username(&self, username: &str) -> Result<Vec<Order>, DomainError> {
        self.store.read_only(|m| m.get_orders_by_username(username))
    }

    /// Draws the next value of `name` in a transaction of its own.
    pub fn next_id(&self, name: &str) -> Result<i32, DomainError> {
        self.store
            .transaction(|m| SequenceGenerator::new(m).next_id(name))
    }
}

fn place(m: &mut dyn Mappers, draft: NewOrder) -> Result<Order, DomainError> {
    let order_id = SequenceGenerator::new(m).next_id(ORDER_SEQUENCE)?;

    // Positive quantities are added to stock.
    for line in &draft.line_items {
        m.update_inventory_quantity(&line.item_id, line.quantity)?;
    }

    let (mut order, pending) = draft.into_header(order_id);
    m.insert_order(&order)?;
    m.insert_order_status(&order)?;

    for (line_number, line) in (1..).zip(pending) {
        let line = line.stamp(order_id, line_number);
        m.insert_line_item(&line)?;
        order.line_items.push(line);
    }
    Ok(order)
}

fn assemble(m: &mut dyn Mappers, order_id: i32) -> Result<Order, DomainError> {
    let mut order = m
        .get_order(order_id)?
        .ok_or(DomainError::OrderNotFound(order_id))?;

    let mut line_items = m.get_line_items_by_order_id(order_id)?;
    for line in &mut line_items {
        let mut item = m
            .get_item(&line.item_id)?
            .ok_or_else(|| DomainError::ItemNotFound(line.item_id.clone()))?;
        // Second read: the live stock level, which may be newer than the item row.
        item.quantity = m
            .get_inventory_quantity(&line.item_id)?
            .ok_or_else(|| DomainError::ItemNotFound(line.item_id.clone()))?;
        line.item = Some(item);
    }
    order.line_items = line_items;

    log::debug!(
        "Assembled order {} with {} line item(s)",
        order_id,
        order.line_items.len()
    );
    Ok(order)
}
