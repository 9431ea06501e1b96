//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartLine;

/// Order status (单据状态)
///
/// `waiting` is set at creation; the kitchen flips to `ready` and may
/// revert. There is no terminal state and no deletion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Waiting,
    Ready,
}

/// A placed cart snapshot tied to a table, mutable in status only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Generated unique id
    pub id: String,
    pub table_number: u32,
    pub items: Vec<CartLine>,
    pub status: OrderStatus,
    /// Sort key for kitchen listings
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot cart lines into a fresh `waiting` order
    pub fn place(table_number: u32, items: Vec<CartLine>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            table_number,
            items,
            status: OrderStatus::Waiting,
            created_at: Utc::now(),
        }
    }

    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartLine::line_total).sum()
    }
}

/// Set order status payload (kitchen action)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Kitchen display order: `waiting` entries first, then newest first
pub fn sort_for_kitchen(orders: &mut [Order]) {
    orders.sort_by(|a, b| match (a.status, b.status) {
        (x, y) if x == y => b.created_at.cmp(&a.created_at),
        (OrderStatus::Waiting, _) => std::cmp::Ordering::Less,
        _ => std::cmp::Ordering::Greater,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn line(name: &str, price: u32, quantity: u32) -> CartLine {
        CartLine {
            category: "Starters".into(),
            name: name.into(),
            unit_price: Decimal::from(price),
            quantity,
        }
    }

    #[test]
    fn placed_order_starts_waiting_with_unique_id() {
        let a = Order::place(4, vec![line("Soup", 120, 2)]);
        let b = Order::place(4, vec![line("Soup", 120, 2)]);

        assert_eq!(a.status, OrderStatus::Waiting);
        assert_ne!(a.id, b.id);
        assert_eq!(a.total(), Decimal::from(240));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Waiting).unwrap(),
            r#""waiting""#
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Ready).unwrap(),
            r#""ready""#
        );
    }

    #[test]
    fn kitchen_sort_puts_waiting_first_then_newest() {
        let mut old_ready = Order::place(1, vec![]);
        old_ready.status = OrderStatus::Ready;
        let mut old_waiting = Order::place(2, vec![]);
        old_waiting.created_at = Utc::now() - Duration::minutes(10);
        let new_waiting = Order::place(3, vec![]);

        let mut orders = vec![old_ready.clone(), old_waiting.clone(), new_waiting.clone()];
        sort_for_kitchen(&mut orders);

        assert_eq!(orders[0].id, new_waiting.id);
        assert_eq!(orders[1].id, old_waiting.id);
        assert_eq!(orders[2].id, old_ready.id);
    }
}
