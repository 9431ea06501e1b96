//! 会话购物车注册表
//!
//! Carts live only in memory, one per browsing session, keyed by a
//! generated session id. Nothing here touches the document store: a cart
//! becomes durable only at the moment an order is placed, when its lines
//! are copied into the order log. Idle sessions are evicted by the
//! cart janitor background task.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use rust_decimal::Decimal;
use shared::models::{Cart, CartLine, CartView};
use thiserror::Error;

/// Cart session errors
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Cart session not found: {0}")]
    UnknownSession(String),

    #[error("Dish not found on the menu: {category}/{dish}")]
    UnknownDish { category: String, dish: String },
}

impl From<CartError> for crate::utils::AppError {
    fn from(e: CartError) -> Self {
        crate::utils::AppError::not_found(e.to_string())
    }
}

#[derive(Debug)]
struct CartSession {
    table_number: u32,
    cart: Cart,
    last_activity: Instant,
}

/// In-memory registry of active cart sessions
#[derive(Debug, Default)]
pub struct CartRegistry {
    sessions: DashMap<String, CartSession>,
}

impl CartRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Open a new empty cart bound to a table number
    pub fn create(&self, table_number: u32) -> CartView {
        let id = uuid::Uuid::new_v4().to_string();
        let session = CartSession {
            table_number,
            cart: Cart::default(),
            last_activity: Instant::now(),
        };
        let view = view_of(&id, &session);
        self.sessions.insert(id, session);
        view
    }

    /// Current view of a session's cart
    pub fn view(&self, id: &str) -> Result<CartView, CartError> {
        let session = self
            .sessions
            .get(id)
            .ok_or_else(|| CartError::UnknownSession(id.to_string()))?;
        Ok(view_of(id, &session))
    }

    /// Adjust a line by ±delta.
    ///
    /// `menu_price` is only consulted when the adjustment creates a new
    /// line (the add-time price copy); existing lines keep the price they
    /// were created with. Creating a line for a dish the menu does not
    /// list is an error.
    pub fn adjust(
        &self,
        id: &str,
        category: &str,
        dish: &str,
        delta: i32,
        menu_price: Option<Decimal>,
    ) -> Result<CartView, CartError> {
        let mut session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| CartError::UnknownSession(id.to_string()))?;
        session.last_activity = Instant::now();

        let creates_line = session.cart.quantity_of(category, dish) == 0 && delta > 0;
        let unit_price = if creates_line {
            menu_price.ok_or_else(|| CartError::UnknownDish {
                category: category.to_string(),
                dish: dish.to_string(),
            })?
        } else {
            // Ignored by Cart::adjust for existing lines
            Decimal::ZERO
        };

        session.cart.adjust(category, dish, unit_price, delta);
        Ok(view_of(id, &session))
    }

    /// Table number and a copy of the lines, for order placement
    pub fn lines(&self, id: &str) -> Result<(u32, Vec<CartLine>), CartError> {
        let mut session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| CartError::UnknownSession(id.to_string()))?;
        session.last_activity = Instant::now();
        Ok((session.table_number, session.cart.lines.clone()))
    }

    /// Reset a session's cart to empty (after a successful order)
    pub fn clear(&self, id: &str) {
        if let Some(mut session) = self.sessions.get_mut(id) {
            session.cart.drain_lines();
            session.last_activity = Instant::now();
        }
    }

    /// Remove sessions idle for longer than `idle`; returns the count
    pub fn evict_idle(&self, idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.last_activity.elapsed() < idle);
        before - self.sessions.len()
    }
}

fn view_of(id: &str, session: &CartSession) -> CartView {
    CartView {
        id: id.to_string(),
        table_number: session.table_number,
        lines: session.cart.lines.clone(),
        total: session.cart.total(),
        total_items: session.cart.total_items(),
    }
}
