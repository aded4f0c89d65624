//! Models shared by several API surfaces, plus re-exported types from external crates.
//!
//! PlayFab names wire fields in PascalCase; unset optional request fields are left out of the
//! body entirely.

use std::collections::HashMap;

use bon::Builder;
/// Date and time types for timestamps in API responses.
pub use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
/// Arbitrary JSON, used for cloud script arguments and event bodies.
pub use serde_json::Value;
use serde_with::skip_serializing_none;

/// Combined entity type and id, the key of the entity programming model.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct EntityKey {
    #[builder(into)]
    pub id: String,
    /// Entity type, e.g. `title_player_account`.
    #[serde(rename = "Type")]
    #[builder(into)]
    pub kind: Option<String>,
}

/// Entity token issued alongside a session ticket or by `GetEntityToken`.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityTokenResponse {
    pub entity: Option<EntityKey>,
    pub entity_token: Option<String>,
    pub token_expiration: Option<DateTime<Utc>>,
}

/// Per-player settings returned by every login call.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserSettings {
    /// Whether install attribution should be reported for this player.
    #[serde(default)]
    pub needs_attribution: bool,
    #[serde(default)]
    pub gather_device_info: bool,
    #[serde(default)]
    pub gather_focus_info: bool,
}

/// Result of every login-family call.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResult {
    pub entity_token: Option<EntityTokenResponse>,
    pub last_login_time: Option<DateTime<Utc>>,
    /// True if the account was newly created on this login.
    #[serde(default)]
    pub newly_created: bool,
    pub play_fab_id: Option<String>,
    pub session_ticket: Option<String>,
    pub settings_for_user: Option<UserSettings>,
}

impl LoginResult {
    #[must_use]
    pub fn needs_attribution(&self) -> bool {
        self.settings_for_user
            .as_ref()
            .is_some_and(|settings| settings.needs_attribution)
    }
}

/// Reports the advertising id an app was installed with.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeInstallRequest {
    /// Android advertising id.
    #[builder(into)]
    pub adid: Option<String>,
    /// Apple identifier for advertisers.
    #[builder(into)]
    pub idfa: Option<String>,
}

/// Result of a call that returns no data.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[expect(
    clippy::empty_structs_with_brackets,
    reason = "PlayFab sends `{}` as the data of these calls, which a unit struct rejects"
)]
pub struct EmptyResponse {}

/// Retrieves title-wide key/value data.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleDataRequest {
    /// Keys to fetch; all keys are returned when unset.
    pub keys: Option<Vec<String>>,
    /// Label of the title data override to apply.
    #[builder(into)]
    pub override_label: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleDataResult {
    #[serde(default)]
    pub data: HashMap<String, String>,
}

/// Who may read a player data record.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, strum_macros::Display,
)]
pub enum UserDataPermission {
    #[default]
    Private,
    Public,
}

#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserDataRecord {
    pub last_updated: DateTime<Utc>,
    pub permission: Option<UserDataPermission>,
    pub value: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserDataResult {
    #[serde(default)]
    pub data: HashMap<String, UserDataRecord>,
    #[serde(default)]
    pub data_version: u32,
    pub play_fab_id: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserDataResult {
    #[serde(default)]
    pub data_version: u32,
}

#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticValue {
    pub statistic_name: String,
    pub value: i32,
    #[serde(default)]
    pub version: u32,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticUpdate {
    #[builder(into)]
    pub statistic_name: String,
    pub value: i32,
    /// Version the update applies to; the current version when unset.
    pub version: Option<u32>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatisticsResult {
    pub play_fab_id: Option<String>,
    #[serde(default)]
    pub statistics: Vec<StatisticValue>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserTitleInfo {
    pub avatar_url: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub display_name: Option<String>,
    pub first_login: Option<DateTime<Utc>>,
    #[serde(rename = "isBanned")]
    pub is_banned: Option<bool>,
    pub last_login: Option<DateTime<Utc>>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserPrivateAccountInfo {
    pub email: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserCustomIdInfo {
    pub custom_id: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserAccountInfo {
    pub created: Option<DateTime<Utc>>,
    pub custom_id_info: Option<UserCustomIdInfo>,
    pub play_fab_id: Option<String>,
    pub private_info: Option<UserPrivateAccountInfo>,
    pub title_info: Option<UserTitleInfo>,
    pub username: Option<String>,
}

/// Wraps a [`UserAccountInfo`], the shape shared by every account lookup.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserAccountInfoResult {
    pub user_info: Option<UserAccountInfo>,
}

/// Result of the event-writing calls.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WriteEventResponse {
    pub event_id: Option<String>,
}
