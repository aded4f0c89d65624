use serde::Deserialize;

use crate::types::EntityKey;

/// The chain of entities a token's entity belongs to.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityLineage {
    pub character_id: Option<String>,
    pub group_id: Option<String>,
    pub master_player_account_id: Option<String>,
    pub namespace_id: Option<String>,
    pub title_id: Option<String>,
    pub title_player_account_id: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateEntityTokenResponse {
    pub entity: Option<EntityKey>,
    pub entity_lineage: Option<EntityLineage>,
    /// How the entity logged in, e.g. `CustomId`.
    pub identity_provider: Option<String>,
}
