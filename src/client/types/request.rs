//! Request types for the PlayFab Client API.
//!
//! Login requests carry an optional `title_id`. When it is unset the title id of the client's
//! [`ApiSettings`](crate::settings::ApiSettings) is sent.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use std::collections::HashMap;

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::{DateTime, StatisticUpdate, UserDataPermission, Utc, Value};

/// Logs in with a custom id unique to the title.
///
/// # Example
///
/// ```
/// use playfab_client_sdk::client::types::request::LoginWithCustomIdRequest;
///
/// let request = LoginWithCustomIdRequest::builder()
///     .custom_id("player-1")
///     .create_account(true)
///     .build();
/// ```
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithCustomIdRequest {
    #[builder(into)]
    pub custom_id: String,
    /// Creates a new account when no account is linked to the id.
    pub create_account: Option<bool>,
    #[builder(into)]
    pub title_id: Option<String>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithEmailAddressRequest {
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    pub password: String,
    #[builder(into)]
    pub title_id: Option<String>,
}

/// Logs in with the username and password of a PlayFab account.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithPlayFabRequest {
    #[builder(into)]
    pub username: String,
    #[builder(into)]
    pub password: String,
    #[builder(into)]
    pub title_id: Option<String>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithAndroidDeviceIdRequest {
    #[builder(into)]
    pub android_device_id: String,
    /// Device model, e.g. `Pixel 8`.
    #[builder(into)]
    pub android_device: Option<String>,
    #[serde(rename = "OS")]
    #[builder(into)]
    pub os: Option<String>,
    pub create_account: Option<bool>,
    #[builder(into)]
    pub title_id: Option<String>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithIosDeviceIdRequest {
    #[builder(into)]
    pub device_id: String,
    #[builder(into)]
    pub device_model: Option<String>,
    #[serde(rename = "OS")]
    #[builder(into)]
    pub os: Option<String>,
    pub create_account: Option<bool>,
    #[builder(into)]
    pub title_id: Option<String>,
}

/// Creates a PlayFab account and logs it in.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterPlayFabUserRequest {
    #[builder(into)]
    pub username: Option<String>,
    #[builder(into)]
    pub email: Option<String>,
    #[builder(into)]
    pub password: Option<String>,
    #[builder(into)]
    pub display_name: Option<String>,
    /// Defaults to true on the service: both username and email must be given.
    pub require_both_username_and_email: Option<bool>,
    #[builder(into)]
    pub title_id: Option<String>,
}

/// Selects the account to read. The logged in player is used when every field is unset.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountInfoRequest {
    #[builder(into)]
    pub email: Option<String>,
    #[builder(into)]
    pub play_fab_id: Option<String>,
    #[builder(into)]
    pub title_display_name: Option<String>,
    #[builder(into)]
    pub username: Option<String>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserDataRequest {
    /// Returns nothing unless the data changed after this version.
    pub if_changed_from_data_version: Option<u32>,
    pub keys: Option<Vec<String>>,
    /// Another player whose public data to read; the logged in player when unset.
    #[builder(into)]
    pub play_fab_id: Option<String>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserDataRequest {
    pub data: Option<HashMap<String, String>>,
    pub keys_to_remove: Option<Vec<String>>,
    pub permission: Option<UserDataPermission>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatisticsRequest {
    /// Every statistic is returned when unset.
    pub statistic_names: Option<Vec<String>>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePlayerStatisticsRequest {
    pub statistics: Vec<StatisticUpdate>,
}

/// Writes a custom PlayStream event for the logged in player.
///
/// # Example
///
/// ```
/// use playfab_client_sdk::client::types::request::WriteClientPlayerEventRequest;
/// use serde_json::json;
///
/// let request = WriteClientPlayerEventRequest::builder()
///     .event_name("level_completed")
///     .body([("Level".to_owned(), json!(3))].into())
///     .build();
/// ```
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct WriteClientPlayerEventRequest {
    #[builder(into)]
    pub event_name: String,
    pub body: Option<HashMap<String, Value>>,
    /// The time of the event; the time of receipt when unset.
    pub timestamp: Option<DateTime<Utc>>,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleNewsRequest {
    /// Number of items to return, 10 when unset.
    pub count: Option<u32>,
}

/// Which CloudScript revision [`ExecuteCloudScriptRequest`] runs.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq, strum_macros::Display)]
pub enum CloudScriptRevisionOption {
    #[default]
    Live,
    Latest,
    Specific,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteCloudScriptRequest {
    #[builder(into)]
    pub function_name: String,
    /// Passed to the function as its `args`.
    pub function_parameter: Option<Value>,
    pub generate_play_stream_event: Option<bool>,
    pub revision_selection: Option<CloudScriptRevisionOption>,
    /// Used with [`CloudScriptRevisionOption::Specific`].
    pub specific_revision: Option<u32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn device_logins_use_upper_case_os() -> crate::Result<()> {
        let request = LoginWithAndroidDeviceIdRequest::builder()
            .android_device_id("device")
            .os("Android 14")
            .build();

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({ "AndroidDeviceId": "device", "OS": "Android 14" })
        );

        let request = LoginWithIosDeviceIdRequest::builder()
            .device_id("device")
            .device_model("iPhone")
            .create_account(true)
            .build();

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({ "DeviceId": "device", "DeviceModel": "iPhone", "CreateAccount": true })
        );
        Ok(())
    }

    #[test]
    fn cloud_script_request_serializes_revision() -> crate::Result<()> {
        let request = ExecuteCloudScriptRequest::builder()
            .function_name("grantReward")
            .function_parameter(json!({ "reward": "gold" }))
            .revision_selection(CloudScriptRevisionOption::Latest)
            .build();

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "FunctionName": "grantReward",
                "FunctionParameter": { "reward": "gold" },
                "RevisionSelection": "Latest"
            })
        );
        Ok(())
    }
}
