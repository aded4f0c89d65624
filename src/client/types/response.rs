use serde::Deserialize;

use crate::types::{DateTime, EntityTokenResponse, UserAccountInfo, UserSettings, Utc, Value};

/// Result of [`Client::register_play_fab_user`](crate::client::Client::register_play_fab_user).
/// The session it carries is stored like the one of a login.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterPlayFabUserResult {
    pub entity_token: Option<EntityTokenResponse>,
    pub play_fab_id: Option<String>,
    pub session_ticket: Option<String>,
    pub settings_for_user: Option<UserSettings>,
    pub username: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountInfoResult {
    pub account_info: Option<UserAccountInfo>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TitleNewsItem {
    pub news_id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleNewsResult {
    #[serde(default)]
    pub news: Vec<TitleNewsItem>,
}

/// A `log.*` call made by a CloudScript function.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LogStatement {
    pub data: Option<Value>,
    /// `Debug`, `Info` or `Error`.
    pub level: Option<String>,
    pub message: Option<String>,
}

/// Describes an exception thrown by a CloudScript function.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ScriptExecutionError {
    pub error: Option<String>,
    pub message: Option<String>,
    pub stack_trace: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteCloudScriptResult {
    pub function_name: Option<String>,
    /// The function's return value.
    pub function_result: Option<Value>,
    #[serde(default)]
    pub revision: u32,
    #[serde(default)]
    pub execution_time_seconds: f64,
    #[serde(default)]
    pub logs: Vec<LogStatement>,
    /// Set when the function threw; the call itself still succeeds.
    pub error: Option<ScriptExecutionError>,
}
