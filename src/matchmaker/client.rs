use super::types::request::{
    AuthUserRequest, LobbyPlayerRequest, StartGameRequest, UserInfoRequest,
};
use super::types::response::{AuthUserResponse, StartGameResponse, UserInfoResponse};
use crate::Result;
use crate::api::{Api, Config};
use crate::settings::ApiSettings;
use crate::types::EmptyResponse;

/// Endpoints of the Matchmaker API, for use with [`Api::call_with`](crate::api::Api::call_with).
pub mod endpoints {
    use crate::api::Endpoint;
    use crate::auth::Credential;

    pub const AUTH_USER: Endpoint = Endpoint::new("/Matchmaker/AuthUser", Credential::SecretKey);
    pub const PLAYER_JOINED: Endpoint =
        Endpoint::new("/Matchmaker/PlayerJoined", Credential::SecretKey);
    pub const PLAYER_LEFT: Endpoint =
        Endpoint::new("/Matchmaker/PlayerLeft", Credential::SecretKey);
    pub const START_GAME: Endpoint = Endpoint::new("/Matchmaker/StartGame", Credential::SecretKey);
    pub const USER_INFO: Endpoint = Endpoint::new("/Matchmaker/UserInfo", Credential::SecretKey);
}

/// Client for the PlayFab Matchmaker API.
///
/// # Example
///
/// ```no_run
/// use playfab_client_sdk::matchmaker::{Client, types::request::AuthUserRequest};
/// use playfab_client_sdk::settings::ApiSettings;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(ApiSettings::from_env())?;
///
/// let request = AuthUserRequest::builder()
///     .authorization_ticket("ticket-from-player")
///     .build();
/// if client.auth_user(&request).await?.authorized {
///     println!("player may join");
/// }
/// # Ok(())
/// # }
/// ```
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

    #[must_use]
    pub fn from_api(api: Api) -> Client {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Checks whether the ticket a player presented belongs to a valid session.
    pub async fn auth_user(&self, request: &AuthUserRequest) -> Result<AuthUserResponse> {
        self.api.call(endpoints::AUTH_USER, request).await
    }

    pub async fn player_joined(&self, request: &LobbyPlayerRequest) -> Result<EmptyResponse> {
        self.api.call(endpoints::PLAYER_JOINED, request).await
    }

    pub async fn player_left(&self, request: &LobbyPlayerRequest) -> Result<EmptyResponse> {
        self.api.call(endpoints::PLAYER_LEFT, request).await
    }

    pub async fn start_game(&self, request: &StartGameRequest) -> Result<StartGameResponse> {
        self.api.call(endpoints::START_GAME, request).await
    }

    /// Retrieves the inventory and virtual currency balances of a player.
    pub async fn user_info(&self, request: &UserInfoRequest) -> Result<UserInfoResponse> {
        self.api.call(endpoints::USER_INFO, request).await
    }
}
