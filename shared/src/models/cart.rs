//! Cart Accumulator
//!
//! In-progress, unsaved dish selection for one browsing session. Lines are
//! identified by category + dish name; the unit price is copied in when the
//! line is created and never re-read from the menu afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One selected dish with its add-time price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub category: String,
    pub name: String,
    /// Copied from the menu when the line was created
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Always positive; the line is removed at zero
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Cart accumulator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity currently selected for a dish (0 when not in the cart)
    pub fn quantity_of(&self, category: &str, name: &str) -> u32 {
        self.find(category, name).map(|l| l.quantity).unwrap_or(0)
    }

    /// Adjust a line by `delta`.
    ///
    /// An existing line is incremented or decremented; it is removed when
    /// the quantity reaches zero, so decrementing below zero is impossible.
    /// A missing line is created only for a positive delta (`unit_price` is
    /// recorded at that moment); a negative delta on a missing line is a
    /// no-op. Returns the resulting quantity.
    pub fn adjust(&mut self, category: &str, name: &str, unit_price: Decimal, delta: i32) -> u32 {
        if let Some(idx) = self.position(category, name) {
            let next = i64::from(self.lines[idx].quantity) + i64::from(delta);
            if next <= 0 {
                self.lines.remove(idx);
                0
            } else {
                self.lines[idx].quantity = next as u32;
                next as u32
            }
        } else if delta > 0 {
            self.lines.push(CartLine {
                category: category.to_string(),
                name: name.to_string(),
                unit_price,
                quantity: delta as u32,
            });
            delta as u32
        } else {
            0
        }
    }

    /// Running total: Σ unit_price × quantity
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total selected quantity across all lines
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Take all lines out of the cart, leaving it empty
    pub fn drain_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    fn find(&self, category: &str, name: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|l| l.category == category && l.name == name)
    }

    fn position(&self, category: &str, name: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.category == category && l.name == name)
    }
}

/// Create cart session payload
///
/// The table number comes straight from the scanned QR target's query
/// parameter; it is not validated against the current table list so that
/// previously printed codes keep working after tables are renumbered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCreate {
    pub table_number: u32,
}

/// Adjust cart line payload (delta of ±N)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartAdjust {
    pub category: String,
    pub dish: String,
    pub delta: i32,
}

/// Cart session view returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub id: String,
    pub table_number: u32,
    pub lines: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub total_items: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(n: u32) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn adding_same_dish_twice_increments_one_line() {
        let mut cart = Cart::default();
        cart.adjust("Starters", "Soup", price(120), 1);
        cart.adjust("Starters", "Soup", price(120), 1);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.quantity_of("Starters", "Soup"), 2);
    }

    #[test]
    fn decrement_to_zero_removes_the_line() {
        let mut cart = Cart::default();
        cart.adjust("Starters", "Soup", price(120), 1);
        let remaining = cart.adjust("Starters", "Soup", price(120), -1);

        assert_eq!(remaining, 0);
        assert!(cart.is_empty());

        // Decrementing a missing line stays a no-op
        assert_eq!(cart.adjust("Starters", "Soup", price(120), -1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn total_is_sum_of_price_times_quantity() {
        let mut cart = Cart::default();
        cart.adjust("Starters", "Soup", price(120), 2);
        cart.adjust("Mains", "Curry", price(250), 1);

        assert_eq!(cart.total(), price(490));
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn price_is_captured_at_add_time() {
        let mut cart = Cart::default();
        cart.adjust("Starters", "Soup", price(120), 1);
        // A later menu price is irrelevant; increments keep the stored price
        cart.adjust("Starters", "Soup", price(999), 1);

        assert_eq!(cart.lines[0].unit_price, price(120));
        assert_eq!(cart.total(), price(240));
    }

    #[test]
    fn drain_empties_the_cart() {
        let mut cart = Cart::default();
        cart.adjust("Starters", "Soup", price(120), 2);
        let lines = cart.drain_lines();

        assert_eq!(lines.len(), 1);
        assert!(cart.is_empty());
    }
}
