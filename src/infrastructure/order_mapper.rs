use chrono::Utc;
use diesel::prelude::*;

use crate::domain::errors::DomainError;
use crate::domain::order::{LineItem, Order, ORDER_STATUS_LINE_NUMBER};
use crate::domain::ports::{LineItemMapper, OrderMapper};
use crate::schema::{line_item, order_status, orders};

use super::models::{LineItemRow, NewOrderStatusRow, OrderRow};
use super::pg_store::PgMappers;

impl OrderMapper for PgMappers<'_> {
    fn insert_order(&mut self, order: &Order) -> Result<(), DomainError> {
        diesel::insert_into(orders::table)
            .values(&OrderRow::from(order))
            .execute(self.conn)?;
        Ok(())
    }

    fn insert_order_status(&mut self, order: &Order) -> Result<(), DomainError> {
        diesel::insert_into(order_status::table)
            .values(&NewOrderStatusRow {
                order_id: order.order_id,
                line_number: ORDER_STATUS_LINE_NUMBER,
                changed_at: Utc::now(),
                status: order.status.clone(),
            })
            .execute(self.conn)?;
        Ok(())
    }

    fn get_order(&mut self, order_id: i32) -> Result<Option<Order>, DomainError> {
        let row: Option<(OrderRow, String)> = orders::table
            .inner_join(order_status::table)
            .filter(orders::order_id.eq(order_id))
            .filter(order_status::line_number.eq(ORDER_STATUS_LINE_NUMBER))
            .select((OrderRow::as_select(), order_status::status))
            .first(self.conn)
            .optional()?;
        Ok(row.map(|(order, status)| order.into_order(status)))
    }

    fn get_orders_by_username(&mut self, username: &str) -> Result<Vec<Order>, DomainError> {
        let rows: Vec<(OrderRow, String)> = orders::table
            .inner_join(order_status::table)
            .filter(orders::username.eq(username))
            .filter(order_status::line_number.eq(ORDER_STATUS_LINE_NUMBER))
            .select((OrderRow::as_select(), order_status::status))
            .order(orders::order_id)
            .load(self.conn)?;
        Ok(rows
            .into_iter()
            .map(|(order, status)| order.into_order(status))
            .collect())
    }
}

impl LineItemMapper for PgMappers<'_> {
    fn insert_line_item(&mut self, line: &LineItem) -> Result<(), DomainError> {
        diesel::insert_into(line_item::table)
            .values(&LineItemRow::from(line))
            .execute(self.conn)?;
        Ok(())
    }

    fn get_line_items_by_order_id(&mut self, order_id: i32) -> Result<Vec<LineItem>, DomainError> {
        let rows = line_item::table
            .filter(line_item::order_id.eq(order_id))
            .select(LineItemRow::as_select())
            .order(line_item::line_number)
            .load(self.conn)?;
        Ok(rows.into_iter().map(LineItem::from).collect())
    }
}
