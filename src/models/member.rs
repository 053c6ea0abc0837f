//! Officer record model matching the frontend Member interface.

use serde::{Deserialize, Serialize};

/// A registered officer with a unique external ID number.
///
/// Records are immutable once created; there are no update or delete
/// operations anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    /// Human-readable identifier, `PREFIX-NNNN`, assigned at creation.
    pub id_number: String,
    pub full_name: String,
    pub rank: String,
    pub responsibility: String,
    pub phone_number: String,
    pub photo_url: Option<String>,
    pub left_flag_url: Option<String>,
    pub center_logo_url: Option<String>,
    pub right_flag_url: Option<String>,
    pub created_at: String,
}

/// Request body for registering a new officer.
///
/// The ID number is store-assigned and must not be supplied by the caller.
/// Image fields accept data URIs or external URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberRequest {
    pub full_name: String,
    pub rank: String,
    pub responsibility: String,
    pub phone_number: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub left_flag_url: Option<String>,
    #[serde(default)]
    pub center_logo_url: Option<String>,
    #[serde(default)]
    pub right_flag_url: Option<String>,
}

/// Response body for a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedMember {
    pub id: i64,
    pub id_number: String,
}
