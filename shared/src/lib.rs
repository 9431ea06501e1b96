//! Shared types for the Comanda ordering system
//!
//! Common types used by the server and its clients: the menu document,
//! dining tables, cart accumulator, orders, and the sync-notification
//! payloads exchanged over the poll/subscribe channel.

pub mod message;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Sync re-exports (for convenient access)
pub use message::SyncPayload;
pub use models::SyncStatus;
