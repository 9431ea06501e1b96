//! Data models
//!
//! Shared between comanda-server and frontend (via API).
//! Documents are persisted as whole JSON blobs, so every type here is
//! plain serde data; prices use `rust_decimal` with a float wire format.

pub mod cart;
pub mod dining_table;
pub mod menu;
pub mod order;
pub mod sync;

// Re-exports
pub use cart::*;
pub use dining_table::*;
pub use menu::*;
pub use order::*;
pub use sync::*;
