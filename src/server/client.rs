use super::types::request::{
    AuthenticateSessionTicketRequest, GetPlayerStatisticsRequest, GetUserAccountInfoRequest,
    GetUserDataRequest, UpdatePlayerStatisticsRequest, UpdateUserDataRequest,
    WriteServerPlayerEventRequest,
};
use super::types::response::AuthenticateSessionTicketResult;
use crate::Result;
use crate::api::{Api, Config};
use crate::settings::ApiSettings;
use crate::types::{
    EmptyResponse, GetPlayerStatisticsResult, GetTitleDataRequest, GetTitleDataResult,
    GetUserDataResult, UpdateUserDataResult, UserAccountInfoResult, WriteEventResponse,
};

/// Endpoints of the Server API, for use with [`Api::call_with`](crate::api::Api::call_with).
pub mod endpoints {
    use crate::api::Endpoint;
    use crate::auth::Credential;

    pub const AUTHENTICATE_SESSION_TICKET: Endpoint =
        Endpoint::new("/Server/AuthenticateSessionTicket", Credential::SecretKey);
    pub const GET_TITLE_DATA: Endpoint =
        Endpoint::new("/Server/GetTitleData", Credential::SecretKey);
    pub const GET_USER_ACCOUNT_INFO: Endpoint =
        Endpoint::new("/Server/GetUserAccountInfo", Credential::SecretKey);
    pub const GET_USER_DATA: Endpoint = Endpoint::new("/Server/GetUserData", Credential::SecretKey);
    pub const UPDATE_USER_DATA: Endpoint =
        Endpoint::new("/Server/UpdateUserData", Credential::SecretKey);
    pub const GET_PLAYER_STATISTICS: Endpoint =
        Endpoint::new("/Server/GetPlayerStatistics", Credential::SecretKey);
    pub const UPDATE_PLAYER_STATISTICS: Endpoint =
        Endpoint::new("/Server/UpdatePlayerStatistics", Credential::SecretKey);
    pub const WRITE_PLAYER_EVENT: Endpoint =
        Endpoint::new("/Server/WritePlayerEvent", Credential::SecretKey);
}

/// Client for the PlayFab Server API.
#[derive(Clone, Debug)]
pub struct Client {
    api: Api,
}

impl Client {
    /// Creates a client for the given title settings.
    ///
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

    /// Validates a session ticket and returns the account it belongs to.
    pub async fn authenticate_session_ticket(
        &self,
        request: &AuthenticateSessionTicketRequest,
    ) -> Result<AuthenticateSessionTicketResult> {
        self.api.call(endpoints::AUTHENTICATE_SESSION_TICKET, request).await
    }

    pub async fn get_title_data(
        &self,
        request: &GetTitleDataRequest,
    ) -> Result<GetTitleDataResult> {
        self.api.call(endpoints::GET_TITLE_DATA, request).await
    }

    pub async fn get_user_account_info(
        &self,
        request: &GetUserAccountInfoRequest,
    ) -> Result<UserAccountInfoResult> {
        self.api.call(endpoints::GET_USER_ACCOUNT_INFO, request).await
    }

    pub async fn get_user_data(&self, request: &GetUserDataRequest) -> Result<GetUserDataResult> {
        self.api.call(endpoints::GET_USER_DATA, request).await
    }

    pub async fn update_user_data(
        &self,
        request: &UpdateUserDataRequest,
    ) -> Result<UpdateUserDataResult> {
        self.api.call(endpoints::UPDATE_USER_DATA, request).await
    }

    pub async fn get_player_statistics(
        &self,
        request: &GetPlayerStatisticsRequest,
    ) -> Result<GetPlayerStatisticsResult> {
        self.api.call(endpoints::GET_PLAYER_STATISTICS, request).await
    }

    pub async fn update_player_statistics(
        &self,
        request: &UpdatePlayerStatisticsRequest,
    ) -> Result<EmptyResponse> {
        self.api.call(endpoints::UPDATE_PLAYER_STATISTICS, request).await
    }

    pub async fn write_player_event(
        &self,
        request: &WriteServerPlayerEventRequest,
    ) -> Result<WriteEventResponse> {
        self.api.call(endpoints::WRITE_PLAYER_EVENT, request).await
    }
}
