//! Sync status model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 同步状态响应
///
/// Polled by pages on a fixed interval; a changed version (or a changed
/// epoch after a server restart) tells the page to re-read its documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Server instance epoch (UUID generated at startup)
    pub epoch: String,
    /// Current version per resource type
    pub versions: HashMap<String, u64>,
}
