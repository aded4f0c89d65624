use serde::Deserialize;

use crate::types::{DateTime, Utc};

/// A ban as stored by PlayFab.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct BanInfo {
    #[serde(default)]
    pub active: bool,
    pub ban_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
    /// Unset for permanent bans.
    pub expires: Option<DateTime<Utc>>,
    #[serde(rename = "IPAddress")]
    pub ip_address: Option<String>,
    pub play_fab_id: Option<String>,
    pub reason: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct BanUsersResult {
    #[serde(default)]
    pub ban_data: Vec<BanInfo>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RevokeAllBansForUserResult {
    /// The bans that were revoked.
    #[serde(default)]
    pub ban_data: Vec<BanInfo>,
}
