//! Order Repository
//!
//! The order log is one persisted document: placement appends, the kitchen
//! mutates status in place, nothing is ever deleted. Listings come back in
//! kitchen display order (`waiting` first, then newest first).

use shared::models::{CartLine, Order, OrderStatus, sort_for_kitchen};

use crate::store::{DocumentStore, keys};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct OrderRepository {
    store: DocumentStore,
}

impl OrderRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// The raw log in placement order (empty when never written or unreadable)
    fn log(&self) -> Vec<Order> {
        self.store.load(keys::ORDERS).unwrap_or_default()
    }

    /// Orders in kitchen display order, optionally filtered to one table
    pub fn list(&self, table: Option<u32>) -> Vec<Order> {
        let mut orders = self.log();
        if let Some(table) = table {
            orders.retain(|o| o.table_number == table);
        }
        sort_for_kitchen(&mut orders);
        orders
    }

    /// Most recently placed order for a table (customer status poll)
    pub fn latest_for_table(&self, table: u32) -> Option<Order> {
        self.log()
            .into_iter()
            .filter(|o| o.table_number == table)
            .max_by_key(|o| o.created_at)
    }

    /// Append a placed cart as a new `waiting` order
    pub fn append(&self, table_number: u32, items: Vec<CartLine>) -> AppResult<Order> {
        if items.is_empty() {
            return Err(AppError::validation("Cannot place an order with an empty cart"));
        }

        let order = Order::place(table_number, items);
        let mut orders = self.log();
        orders.push(order.clone());
        self.store.save(keys::ORDERS, &orders)?;
        Ok(order)
    }

    /// Set an order's status.
    ///
    /// Returns the order and whether anything changed; re-applying the
    /// current status skips the document write entirely, which is what
    /// makes repeated kitchen clicks idempotent.
    pub fn set_status(&self, id: &str, status: OrderStatus) -> AppResult<(Order, bool)> {
        let mut orders = self.log();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

        if order.status == status {
            return Ok((order.clone(), false));
        }

        order.status = status;
        let updated = order.clone();
        self.store.save(keys::ORDERS, &orders)?;
        Ok((updated, true))
    }
}
