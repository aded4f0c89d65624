#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Writes one key of title data. A missing `value` removes the key.
///
/// # Example
///
/// ```
/// use playfab_client_sdk::admin::types::request::SetTitleDataRequest;
///
/// let request = SetTitleDataRequest::builder()
///     .key("motd")
///     .value("Welcome")
///     .build();
/// ```
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct SetTitleDataRequest {
    #[builder(into)]
    pub key: String,
    #[builder(into)]
    pub value: Option<String>,
}

/// Looks up an account by exactly one of its identifiers.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct LookupUserAccountInfoRequest {
    #[builder(into)]
    pub email: Option<String>,
    #[builder(into)]
    pub play_fab_id: Option<String>,
    #[builder(into)]
    pub title_display_name: Option<String>,
    #[builder(into)]
    pub username: Option<String>,
}

/// A single ban. Either `play_fab_id` or `ip_address` selects who is banned.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct BanRequest {
    /// Permanent when unset.
    pub duration_in_hours: Option<u32>,
    #[serde(rename = "IPAddress")]
    #[builder(into)]
    pub ip_address: Option<String>,
    #[builder(into)]
    pub play_fab_id: Option<String>,
    #[builder(into)]
    pub reason: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct BanUsersRequest {
    pub bans: Vec<BanRequest>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct RevokeAllBansForUserRequest {
    #[builder(into)]
    pub play_fab_id: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePlayerRequest {
    #[builder(into)]
    pub play_fab_id: String,
}
