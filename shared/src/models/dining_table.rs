//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
///
/// Numbers stay dense: deleting a table renumbers the remainder and
/// re-derives their QR targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    /// Positive, dense table number
    pub number: u32,
    /// Derived customer-menu URL embedding the number (stable per deployment)
    pub qr_target: String,
}

/// Create dining table payload
///
/// The number is assigned by the server; creation takes no fields but keeps
/// a payload type so the surface can grow without breaking clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableCreate {}
