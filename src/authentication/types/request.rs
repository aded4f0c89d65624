#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::EntityKey;

/// Requests an entity token. Without an `entity`, the token is issued for the caller: the title
/// when authorised with the secret key, the player's `title_player_account` otherwise.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityTokenRequest {
    pub entity: Option<EntityKey>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateEntityTokenRequest {
    /// The token to inspect. The caller's own token goes in the header.
    #[builder(into)]
    pub entity_token: String,
}
