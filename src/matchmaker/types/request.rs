#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::Region;

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct AuthUserRequest {
    /// Session ticket the player presented to the matchmaker.
    #[builder(into)]
    pub authorization_ticket: String,
}

/// Lobby membership change, shared by `PlayerJoined` and `PlayerLeft`.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct LobbyPlayerRequest {
    #[builder(into)]
    pub lobby_id: String,
    #[builder(into)]
    pub play_fab_id: String,
}

/// Starts a game server instance.
///
/// # Example
///
/// ```
/// use playfab_client_sdk::matchmaker::types::Region;
/// use playfab_client_sdk::matchmaker::types::request::StartGameRequest;
///
/// let request = StartGameRequest::builder()
///     .build_version("1.4.0")
///     .game_mode("capture_the_flag")
///     .region(Region::EuWest)
///     .build();
/// ```
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct StartGameRequest {
    /// Server build version to run.
    #[serde(rename = "Build")]
    #[builder(into)]
    pub build_version: String,
    #[builder(into)]
    pub custom_command_line: Option<String>,
    /// Receives game server events, e.g. `http://matchmaker.example.com/events`.
    #[builder(into)]
    pub external_matchmaker_event_endpoint: Option<String>,
    #[builder(into)]
    pub game_mode: String,
    pub region: Region,
}

#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct UserInfoRequest {
    #[builder(into)]
    pub play_fab_id: String,
    /// Oldest catalog version whose items are returned; 0 for all.
    #[builder(default)]
    pub min_catalog_version: i32,
}
