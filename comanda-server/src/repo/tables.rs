//! Dining Table Repository
//!
//! Table numbers stay dense: creation appends number `len + 1`, deletion
//! renumbers the remainder and re-derives their QR targets. The QR target
//! itself only depends on configuration, so a number always maps to the
//! same URL within a deployment.

use shared::models::DiningTable;

use crate::core::Config;
use crate::qr;
use crate::store::{DocumentStore, keys};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct TableRepository {
    store: DocumentStore,
    base_url: String,
    menu_path: String,
}

impl TableRepository {
    pub fn new(store: DocumentStore, config: &Config) -> Self {
        Self {
            store,
            base_url: config.public_base_url.clone(),
            menu_path: config.menu_page_path.clone(),
        }
    }

    /// All tables in number order (empty when never written or unreadable)
    pub fn list(&self) -> Vec<DiningTable> {
        self.store.load(keys::TABLES).unwrap_or_default()
    }

    pub fn find(&self, number: u32) -> Option<DiningTable> {
        self.list().into_iter().find(|t| t.number == number)
    }

    /// Append a table with the next dense number
    pub fn add(&self) -> AppResult<DiningTable> {
        let mut tables = self.list();
        let number = tables.len() as u32 + 1;
        let table = DiningTable {
            number,
            qr_target: self.derive_qr(number),
        };

        tables.push(table.clone());
        self.store.save(keys::TABLES, &tables)?;
        Ok(table)
    }

    /// Delete a table, renumber the remainder densely and re-derive QR targets
    pub fn delete(&self, number: u32) -> AppResult<Vec<DiningTable>> {
        let mut tables = self.list();
        if !tables.iter().any(|t| t.number == number) {
            return Err(AppError::not_found(format!("Table {} not found", number)));
        }

        tables.retain(|t| t.number != number);
        for (index, table) in tables.iter_mut().enumerate() {
            table.number = index as u32 + 1;
            table.qr_target = self.derive_qr(table.number);
        }

        self.store.save(keys::TABLES, &tables)?;
        Ok(tables)
    }

    fn derive_qr(&self, number: u32) -> String {
        qr::qr_target(&self.base_url, &self.menu_path, number)
    }
}
