use std::collections::HashMap;

use serde::Deserialize;

use crate::types::{DateTime, Utc};

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AuthUserResponse {
    #[serde(default)]
    pub authorized: bool,
    pub play_fab_id: Option<String>,
}

/// Connection details of a started game server instance.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StartGameResponse {
    #[serde(rename = "GameID")]
    pub game_id: Option<String>,
    #[serde(rename = "ServerIPV4Address")]
    pub server_ipv4_address: Option<String>,
    #[serde(rename = "ServerIPV6Address")]
    pub server_ipv6_address: Option<String>,
    pub server_port: Option<u16>,
    #[serde(rename = "ServerPublicDNSName")]
    pub server_public_dns_name: Option<String>,
    /// Password players need to join the instance.
    pub password: Option<String>,
}

/// An item in a player's inventory.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemInstance {
    pub catalog_version: Option<String>,
    pub display_name: Option<String>,
    pub expiration: Option<DateTime<Utc>>,
    pub item_class: Option<String>,
    pub item_id: Option<String>,
    pub item_instance_id: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    /// Unset for items without a use count.
    pub remaining_uses: Option<i32>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserInfoResponse {
    #[serde(default)]
    pub inventory: Vec<ItemInstance>,
    #[serde(default)]
    pub is_developer: bool,
    pub play_fab_id: Option<String>,
    pub steam_id: Option<String>,
    pub title_display_name: Option<String>,
    pub username: Option<String>,
    /// Balance per virtual currency code.
    #[serde(default)]
    pub virtual_currency: HashMap<String, i32>,
}
