#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use std::collections::HashMap;

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::{DateTime, StatisticUpdate, UserDataPermission, Utc, Value};

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticateSessionTicketRequest {
    /// The ticket a game client received from its login call.
    #[builder(into)]
    pub session_ticket: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserAccountInfoRequest {
    #[builder(into)]
    pub play_fab_id: String,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserDataRequest {
    #[builder(into)]
    pub play_fab_id: String,
    pub if_changed_from_data_version: Option<u32>,
    pub keys: Option<Vec<String>>,
}

/// Writes or removes keys of a player's data.
///
/// # Example
///
/// ```
/// use playfab_client_sdk::server::types::request::UpdateUserDataRequest;
///
/// let request = UpdateUserDataRequest::builder()
///     .play_fab_id("A1B2C3")
///     .keys_to_remove(vec!["legacy_key".to_owned()])
///     .build();
/// ```
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserDataRequest {
    #[builder(into)]
    pub play_fab_id: String,
    pub data: Option<HashMap<String, String>>,
    pub keys_to_remove: Option<Vec<String>>,
    pub permission: Option<UserDataPermission>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatisticsRequest {
    #[builder(into)]
    pub play_fab_id: String,
    pub statistic_names: Option<Vec<String>>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePlayerStatisticsRequest {
    #[builder(into)]
    pub play_fab_id: String,
    pub statistics: Vec<StatisticUpdate>,
    /// Allows updating statistics the title marked client-read-only.
    pub force_update: Option<bool>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct WriteServerPlayerEventRequest {
    #[builder(into)]
    pub play_fab_id: String,
    #[builder(into)]
    pub event_name: String,
    pub body: Option<HashMap<String, Value>>,
    pub timestamp: Option<DateTime<Utc>>,
}
