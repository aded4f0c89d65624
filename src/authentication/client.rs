use super::types::request::{GetEntityTokenRequest, ValidateEntityTokenRequest};
use super::types::response::ValidateEntityTokenResponse;
use crate::Result;
use crate::api::{Api, Config};
use crate::settings::ApiSettings;
use crate::types::EntityTokenResponse;

/// Endpoints of the Authentication API, for use with
/// [`Api::call_with`](crate::api::Api::call_with).
pub mod endpoints {
    use crate::api::{Endpoint, OnSuccess};
    use crate::auth::Credential;

    pub const GET_ENTITY_TOKEN: Endpoint =
        Endpoint::new("/Authentication/GetEntityToken", Credential::Any)
            .with_effect(OnSuccess::EntityToken);
    pub const VALIDATE_ENTITY_TOKEN: Endpoint =
        Endpoint::new("/Authentication/ValidateEntityToken", Credential::EntityToken);
}

/// Client for the PlayFab Authentication API.
#[derive(Clone, Debug)]
pub struct Client {
    api: Api,
}

impl Client {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(settings: ApiSettings) -> Result<Client> {
        Self::with_config(Config::builder().settings(settings).build())
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: Config) -> Result<Client> {
        Ok(Self::from_api(Api::new(config)?))
    }

    /// Creates a client sharing the settings and session of `api`, typically the one of a
    /// logged in [`crate::client::Client`].
    #[must_use]
    pub fn from_api(api: Api) -> Client {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Issues an entity token and stores it, with the entity id and type, on this client.
    ///
    /// Authorised with the entity token if one is held, else the session ticket, else the
    /// developer secret key.
    pub async fn get_entity_token(
        &self,
        request: &GetEntityTokenRequest,
    ) -> Result<EntityTokenResponse> {
        self.api.call(endpoints::GET_ENTITY_TOKEN, request).await
    }

    /// Returns the entity and lineage another entity's token belongs to.
    pub async fn validate_entity_token(
        &self,
        request: &ValidateEntityTokenRequest,
    ) -> Result<ValidateEntityTokenResponse> {
        self.api.call(endpoints::VALIDATE_ENTITY_TOKEN, request).await
    }
}
