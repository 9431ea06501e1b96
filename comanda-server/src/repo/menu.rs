//! Menu Repository
//!
//! Category and dish operations on the working menu document, plus the
//! confirmed-menu snapshot. Every mutation loads the whole document,
//! applies the change and writes the whole document back in one store
//! write, so the category/dish pairing can never be observed half-updated.

use shared::models::{CategoryCreate, Dish, DishCreate, MenuDocument};

use crate::store::{DocumentStore, keys};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct MenuRepository {
    store: DocumentStore,
}

impl MenuRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Working menu document (empty when never written or unreadable)
    pub fn get(&self) -> MenuDocument {
        let mut doc: MenuDocument = self.store.load(keys::MENU).unwrap_or_default();
        doc.normalize();
        doc
    }

    /// Confirmed snapshot, absent until the menu was first confirmed
    pub fn get_confirmed(&self) -> Option<MenuDocument> {
        let mut doc: MenuDocument = self.store.load(keys::CONFIRMED_MENU)?;
        doc.normalize();
        Some(doc)
    }

    /// Add a category with an empty dish list
    pub fn add_category(&self, data: CategoryCreate) -> AppResult<MenuDocument> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "category name", MAX_NAME_LEN)?;

        let mut doc = self.get();
        if doc.has_category(&name) {
            return Err(AppError::conflict(format!(
                "Category '{}' already exists",
                name
            )));
        }

        doc.categories.push(name.clone());
        doc.dishes.insert(name, Vec::new());
        self.store.save(keys::MENU, &doc)?;
        Ok(doc)
    }

    /// Delete a category and all its dishes in one document write
    pub fn delete_category(&self, name: &str) -> AppResult<MenuDocument> {
        let mut doc = self.get();
        if !doc.has_category(name) {
            return Err(AppError::not_found(format!("Category {} not found", name)));
        }

        doc.categories.retain(|c| c != name);
        doc.dishes.remove(name);
        self.store.save(keys::MENU, &doc)?;
        Ok(doc)
    }

    /// Add a dish to a category
    pub fn add_dish(&self, category: &str, data: DishCreate) -> AppResult<Dish> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "dish name", MAX_NAME_LEN)?;
        validate_price(data.price, "dish price")?;
        validate_optional_text(&data.description, "dish description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.image_url, "dish image URL", MAX_URL_LEN)?;

        let mut doc = self.get();
        if !doc.has_category(category) {
            return Err(AppError::not_found(format!(
                "Category {} not found",
                category
            )));
        }
        if doc.find_dish(category, &name).is_some() {
            return Err(AppError::conflict(format!(
                "Dish '{}' already exists in category '{}'",
                name, category
            )));
        }

        let dish = Dish {
            name,
            price: data.price,
            description: data.description.filter(|d| !d.trim().is_empty()),
            image_url: data.image_url.filter(|u| !u.trim().is_empty()),
        };

        doc.dishes
            .entry(category.to_string())
            .or_default()
            .push(dish.clone());
        self.store.save(keys::MENU, &doc)?;
        Ok(dish)
    }

    /// Delete a dish from a category
    pub fn delete_dish(&self, category: &str, name: &str) -> AppResult<bool> {
        let mut doc = self.get();
        if !doc.has_category(category) {
            return Err(AppError::not_found(format!(
                "Category {} not found",
                category
            )));
        }
        if doc.find_dish(category, name).is_none() {
            return Err(AppError::not_found(format!(
                "Dish {} not found in category {}",
                name, category
            )));
        }

        if let Some(dishes) = doc.dishes.get_mut(category) {
            dishes.retain(|d| d.name != name);
        }
        self.store.save(keys::MENU, &doc)?;
        Ok(true)
    }

    /// Snapshot the working menu to the confirmed document
    pub fn confirm(&self) -> AppResult<MenuDocument> {
        let doc = self.get();
        if doc.is_empty() {
            return Err(AppError::validation(
                "Cannot confirm a menu with no categories",
            ));
        }

        self.store.save(keys::CONFIRMED_MENU, &doc)?;
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn repo() -> MenuRepository {
        MenuRepository::new(DocumentStore::open_in_memory().unwrap())
    }

    fn soup() -> DishCreate {
        DishCreate {
            name: "Soup".into(),
            price: Decimal::from(120),
            description: Some("Tomato and basil".into()),
            image_url: None,
        }
    }

    fn assert_invariant(doc: &MenuDocument) {
        for category in &doc.categories {
            assert!(doc.dishes.contains_key(category), "missing entry: {category}");
        }
        for key in doc.dishes.keys() {
            assert!(doc.has_category(key), "orphan entry: {key}");
        }
    }

    #[test]
    fn category_dish_pairing_holds_across_sequences() {
        let repo = repo();
        repo.add_category(CategoryCreate { name: "Starters".into() }).unwrap();
        repo.add_category(CategoryCreate { name: "Mains".into() }).unwrap();
        repo.add_dish("Starters", soup()).unwrap();
        repo.delete_category("Mains").unwrap();
        repo.add_category(CategoryCreate { name: "Desserts".into() }).unwrap();
        repo.delete_dish("Starters", "Soup").unwrap();

        assert_invariant(&repo.get());
    }

    #[test]
    fn deleting_a_category_removes_its_dishes_and_readding_starts_empty() {
        let repo = repo();
        repo.add_category(CategoryCreate { name: "Starters".into() }).unwrap();
        repo.add_dish("Starters", soup()).unwrap();

        repo.delete_category("Starters").unwrap();
        assert!(repo.get().is_empty());

        let doc = repo
            .add_category(CategoryCreate { name: "Starters".into() })
            .unwrap();
        assert!(doc.dishes_in("Starters").is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected_without_mutation() {
        let repo = repo();
        repo.add_category(CategoryCreate { name: "Starters".into() }).unwrap();
        repo.add_dish("Starters", soup()).unwrap();

        let err = repo
            .add_category(CategoryCreate { name: "Starters".into() })
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let err = repo.add_dish("Starters", soup()).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let doc = repo.get();
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.dishes_in("Starters").len(), 1);
    }

    #[test]
    fn validation_failures_leave_the_document_unchanged() {
        let repo = repo();
        repo.add_category(CategoryCreate { name: "Starters".into() }).unwrap();

        assert!(matches!(
            repo.add_category(CategoryCreate { name: "   ".into() }),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            repo.add_dish(
                "Starters",
                DishCreate {
                    name: "Free".into(),
                    price: Decimal::ZERO,
                    description: None,
                    image_url: None,
                },
            ),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            repo.add_dish("Mains", soup()),
            Err(AppError::NotFound(_))
        ));

        let doc = repo.get();
        assert_eq!(doc.categories, vec!["Starters".to_string()]);
        assert_eq!(doc.total_dishes(), 0);
    }

    #[test]
    fn category_names_are_trimmed_on_creation() {
        let repo = repo();
        repo.add_category(CategoryCreate { name: "  Starters  ".into() }).unwrap();
        assert!(repo.get().has_category("Starters"));
    }

    #[test]
    fn confirmed_snapshot_is_isolated_from_later_edits() {
        let repo = repo();
        assert!(matches!(repo.confirm(), Err(AppError::Validation(_))));
        assert!(repo.get_confirmed().is_none());

        repo.add_category(CategoryCreate { name: "Starters".into() }).unwrap();
        repo.add_dish("Starters", soup()).unwrap();
        repo.confirm().unwrap();

        repo.delete_category("Starters").unwrap();

        let confirmed = repo.get_confirmed().unwrap();
        assert_eq!(confirmed.dishes_in("Starters").len(), 1);
        assert!(repo.get().is_empty());
    }
}
