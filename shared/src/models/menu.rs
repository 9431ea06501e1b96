//! Menu Document Model

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fallback image shown when a dish carries no image URL
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

/// Full menu document for a deployment (菜单)
///
/// Invariant: every name in `categories` has a (possibly empty) entry in
/// `dishes`, and `dishes` has no entry for an unlisted category. All
/// mutations rewrite the whole document in one store write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    /// Ordered, unique category names
    #[serde(default)]
    pub categories: Vec<String>,
    /// Dishes per category, keyed by category name
    #[serde(default)]
    pub dishes: HashMap<String, Vec<Dish>>,
}

impl MenuDocument {
    /// True when the document lists no categories at all
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Dishes under a category (empty slice when absent)
    pub fn dishes_in(&self, category: &str) -> &[Dish] {
        self.dishes.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find_dish(&self, category: &str, name: &str) -> Option<&Dish> {
        self.dishes_in(category).iter().find(|d| d.name == name)
    }

    pub fn total_dishes(&self) -> usize {
        self.dishes.values().map(Vec::len).sum()
    }

    /// Repair the category/dish pairing after loading an externally edited
    /// document: listed categories get an entry, orphan entries are dropped.
    pub fn normalize(&mut self) {
        for category in &self.categories {
            self.dishes.entry(category.clone()).or_default();
        }
        let categories = &self.categories;
        self.dishes.retain(|name, _| categories.iter().any(|c| c == name));
    }
}

/// Dish entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique within its category
    pub name: String,
    /// Unit price, strictly positive
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Dish {
    /// Image URL with the placeholder fallback applied
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
