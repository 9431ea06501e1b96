//! Sync notification types
//!
//! Emitted by the server after every document mutation. In-process
//! subscribers receive them over a broadcast channel; remote pages observe
//! the same changes by polling `/api/sync/status` and comparing versions.

use serde::{Deserialize, Serialize};

/// Resource change notification (资源变更通知)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// Resource type (e.g. "menu", "tables", "orders")
    pub resource: String,
    /// Monotonically increasing per-resource version
    pub version: u64,
    /// Change type ("created", "updated", "deleted", "confirmed")
    pub action: String,
    /// Entity id within the resource (category name, table number, order id)
    pub id: String,
    /// Resource data (None for deletions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
