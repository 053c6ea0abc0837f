//! Verification scan models.

use serde::{Deserialize, Serialize};

/// Request body for recording a verification scan.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub id_number: String,
    /// Free-text description of the verifying client.
    #[serde(default)]
    pub scanner_info: Option<String>,
}

/// Response body for a recorded scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub success: bool,
}
