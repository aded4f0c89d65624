use super::types::request::{
    ExecuteCloudScriptRequest, GetAccountInfoRequest, GetPlayerStatisticsRequest,
    GetTitleNewsRequest, GetUserDataRequest, LoginWithAndroidDeviceIdRequest,
    LoginWithCustomIdRequest, LoginWithEmailAddressRequest, LoginWithIosDeviceIdRequest,
    LoginWithPlayFabRequest, RegisterPlayFabUserRequest, UpdatePlayerStatisticsRequest,
    UpdateUserDataRequest, WriteClientPlayerEventRequest,
};
use super::types::response::{
    ExecuteCloudScriptResult, GetAccountInfoResult, GetTitleNewsResult, RegisterPlayFabUserResult,
};
use crate::Result;
use crate::api::{Api, Config};
use crate::auth::AuthenticationContext;
use crate::settings::ApiSettings;
use crate::types::{
    AttributeInstallRequest, EmptyResponse, GetPlayerStatisticsResult, GetTitleDataRequest,
    GetTitleDataResult, GetUserDataResult, LoginResult, UpdateUserDataResult, WriteEventResponse,
};

/// Endpoints of the Client API, for use with [`Api::call_with`](crate::api::Api::call_with).
pub mod endpoints {
    use crate::api::Endpoint;
    use crate::auth::Credential;

    pub const LOGIN_WITH_CUSTOM_ID: Endpoint = Endpoint::login("/Client/LoginWithCustomID");
    pub const LOGIN_WITH_EMAIL_ADDRESS: Endpoint = Endpoint::login("/Client/LoginWithEmailAddress");
    pub const LOGIN_WITH_PLAY_FAB: Endpoint = Endpoint::login("/Client/LoginWithPlayFab");
    pub const LOGIN_WITH_ANDROID_DEVICE_ID: Endpoint =
        Endpoint::login("/Client/LoginWithAndroidDeviceID");
    pub const LOGIN_WITH_IOS_DEVICE_ID: Endpoint = Endpoint::login("/Client/LoginWithIOSDeviceID");
    pub const REGISTER_PLAY_FAB_USER: Endpoint = Endpoint::login("/Client/RegisterPlayFabUser");

    pub const GET_ACCOUNT_INFO: Endpoint =
        Endpoint::new("/Client/GetAccountInfo", Credential::SessionTicket);
    pub const GET_TITLE_DATA: Endpoint =
        Endpoint::new("/Client/GetTitleData", Credential::SessionTicket);
    pub const GET_USER_DATA: Endpoint =
        Endpoint::new("/Client/GetUserData", Credential::SessionTicket);
    pub const UPDATE_USER_DATA: Endpoint =
        Endpoint::new("/Client/UpdateUserData", Credential::SessionTicket);
    pub const GET_PLAYER_STATISTICS: Endpoint =
        Endpoint::new("/Client/GetPlayerStatistics", Credential::SessionTicket);
    pub const UPDATE_PLAYER_STATISTICS: Endpoint =
        Endpoint::new("/Client/UpdatePlayerStatistics", Credential::SessionTicket);
    pub const WRITE_PLAYER_EVENT: Endpoint =
        Endpoint::new("/Client/WritePlayerEvent", Credential::SessionTicket);
    pub const GET_TITLE_NEWS: Endpoint =
        Endpoint::new("/Client/GetTitleNews", Credential::SessionTicket);
    pub const EXECUTE_CLOUD_SCRIPT: Endpoint =
        Endpoint::new("/Client/ExecuteCloudScript", Credential::SessionTicket);

    /// Reported once after a login that needs install attribution.
    pub const ATTRIBUTE_INSTALL: Endpoint = crate::api::ATTRIBUTE_INSTALL;
}

/// Client for the PlayFab Client API.
///
/// Cloning is cheap. Clones, and clients of other surfaces built with [`Client::from_api`], share
/// one session.
///
/// # Example
///
/// ```no_run
/// use playfab_client_sdk::authentication;
/// use playfab_client_sdk::authentication::types::request::GetEntityTokenRequest;
/// use playfab_client_sdk::client::{Client, types::request::LoginWithCustomIdRequest};
/// use playfab_client_sdk::settings::ApiSettings;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(ApiSettings::builder().title_id("ABCD").build())?;
/// client
///     .login_with_custom_id(&LoginWithCustomIdRequest::builder().custom_id("player-1").build())
///     .await?;
///
/// // Shares the session established above
/// let entities = authentication::Client::from_api(client.api().clone());
/// entities
///     .get_entity_token(&GetEntityTokenRequest::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    api: Api,
}

impl Client {
    /// Creates a client for the given title settings, with no session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(settings: ApiSettings) -> Result<Client> {
        Self::with_config(Config::builder().settings(settings).build())
    }

    /// Creates a client from a full [`Config`], e.g. to register an error hook or resume a
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: Config) -> Result<Client> {
        Ok(Self::from_api(Api::new(config)?))
    }

    /// Creates a client sharing the settings and authentication context of `api`.
    #[must_use]
    pub fn from_api(api: Api) -> Client {
        Self { api }
    }

    /// The shared call core, for endpoints without a typed method.
    #[must_use]
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// A copy of the current session credentials.
    #[must_use]
    pub fn authentication_context(&self) -> AuthenticationContext {
        self.api.authentication_context()
    }

    /// Whether a login succeeded and the session has not been forgotten since.
    #[must_use]
    pub fn is_client_logged_in(&self) -> bool {
        self.api.is_client_logged_in()
    }

    /// Logs out locally. Calls needing a session ticket fail until the next login.
    pub fn forget_all_credentials(&self) {
        self.api.forget_all_credentials();
    }

    pub async fn login_with_custom_id(
        &self,
        request: &LoginWithCustomIdRequest,
    ) -> Result<LoginResult> {
        self.api.call(endpoints::LOGIN_WITH_CUSTOM_ID, request).await
    }

    pub async fn login_with_email_address(
        &self,
        request: &LoginWithEmailAddressRequest,
    ) -> Result<LoginResult> {
        self.api.call(endpoints::LOGIN_WITH_EMAIL_ADDRESS, request).await
    }

    pub async fn login_with_play_fab(
        &self,
        request: &LoginWithPlayFabRequest,
    ) -> Result<LoginResult> {
        self.api.call(endpoints::LOGIN_WITH_PLAY_FAB, request).await
    }

    pub async fn login_with_android_device_id(
        &self,
        request: &LoginWithAndroidDeviceIdRequest,
    ) -> Result<LoginResult> {
        self.api.call(endpoints::LOGIN_WITH_ANDROID_DEVICE_ID, request).await
    }

    pub async fn login_with_ios_device_id(
        &self,
        request: &LoginWithIosDeviceIdRequest,
    ) -> Result<LoginResult> {
        self.api.call(endpoints::LOGIN_WITH_IOS_DEVICE_ID, request).await
    }

    /// Registers a new account. The returned session is stored as after a login.
    pub async fn register_play_fab_user(
        &self,
        request: &RegisterPlayFabUserRequest,
    ) -> Result<RegisterPlayFabUserResult> {
        self.api.call(endpoints::REGISTER_PLAY_FAB_USER, request).await
    }

    /// Reports an advertising id by hand. Logins already do this when the settings carry one.
    pub async fn attribute_install(
        &self,
        request: &AttributeInstallRequest,
    ) -> Result<EmptyResponse> {
        self.api.call(endpoints::ATTRIBUTE_INSTALL, request).await
    }

    pub async fn get_account_info(
        &self,
        request: &GetAccountInfoRequest,
    ) -> Result<GetAccountInfoResult> {
        self.api.call(endpoints::GET_ACCOUNT_INFO, request).await
    }

    pub async fn get_title_data(
        &self,
        request: &GetTitleDataRequest,
    ) -> Result<GetTitleDataResult> {
        self.api.call(endpoints::GET_TITLE_DATA, request).await
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
        request: &WriteClientPlayerEventRequest,
    ) -> Result<WriteEventResponse> {
        self.api.call(endpoints::WRITE_PLAYER_EVENT, request).await
    }

    pub async fn get_title_news(
        &self,
        request: &GetTitleNewsRequest,
    ) -> Result<GetTitleNewsResult> {
        self.api.call(endpoints::GET_TITLE_NEWS, request).await
    }

    /// Runs a CloudScript function. An exception thrown by the function is reported in
    /// [`ExecuteCloudScriptResult::error`], not as an `Err`.
    pub async fn execute_cloud_script(
        &self,
        request: &ExecuteCloudScriptRequest,
    ) -> Result<ExecuteCloudScriptResult> {
        self.api.call(endpoints::EXECUTE_CLOUD_SCRIPT, request).await
    }
}
