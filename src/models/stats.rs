//! Dashboard statistics model.

use serde::{Deserialize, Serialize};

/// Row counts over the members and scans tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_members: i64,
    pub total_scans: i64,
}
