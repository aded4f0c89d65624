use super::types::request::{
    BanUsersRequest, DeletePlayerRequest, LookupUserAccountInfoRequest,
    RevokeAllBansForUserRequest, SetTitleDataRequest,
};
use super::types::response::{BanUsersResult, RevokeAllBansForUserResult};
use crate::Result;
use crate::api::{Api, Config};
use crate::settings::ApiSettings;
use crate::types::{EmptyResponse, GetTitleDataRequest, GetTitleDataResult, UserAccountInfoResult};

/// Endpoints of the Admin API, for use with [`Api::call_with`](crate::api::Api::call_with).
pub mod endpoints {
    use crate::api::Endpoint;
    use crate::auth::Credential;

    pub const GET_TITLE_DATA: Endpoint =
        Endpoint::new("/Admin/GetTitleData", Credential::SecretKey);
    pub const SET_TITLE_DATA: Endpoint =
        Endpoint::new("/Admin/SetTitleData", Credential::SecretKey);
    pub const GET_TITLE_INTERNAL_DATA: Endpoint =
        Endpoint::new("/Admin/GetTitleInternalData", Credential::SecretKey);
    pub const SET_TITLE_INTERNAL_DATA: Endpoint =
        Endpoint::new("/Admin/SetTitleInternalData", Credential::SecretKey);
    pub const GET_USER_ACCOUNT_INFO: Endpoint =
        Endpoint::new("/Admin/GetUserAccountInfo", Credential::SecretKey);
    pub const BAN_USERS: Endpoint = Endpoint::new("/Admin/BanUsers", Credential::SecretKey);
    pub const REVOKE_ALL_BANS_FOR_USER: Endpoint =
        Endpoint::new("/Admin/RevokeAllBansForUser", Credential::SecretKey);
    pub const DELETE_PLAYER: Endpoint = Endpoint::new("/Admin/DeletePlayer", Credential::SecretKey);
}

/// Client for the PlayFab Admin API.
///
/// Every method requires [`ApiSettings::developer_secret_key`] and fails with a
/// [`Kind::Authentication`](crate::error::Kind::Authentication) error, without contacting
/// PlayFab, when it is missing.
///
/// # Example
///
/// ```no_run
/// use playfab_client_sdk::admin::{Client, types::request::RevokeAllBansForUserRequest};
/// use playfab_client_sdk::auth::SecretString;
/// use playfab_client_sdk::settings::ApiSettings;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ApiSettings::builder()
///     .title_id("ABCD")
///     .developer_secret_key(SecretString::from("secret".to_owned()))
///     .build();
/// let client = Client::new(settings)?;
///
/// let request = RevokeAllBansForUserRequest::builder()
///     .play_fab_id("A1B2C3")
///     .build();
/// let revoked = client.revoke_all_bans_for_user(&request).await?;
/// println!("revoked {} bans", revoked.ban_data.len());
/// # Ok(())
/// # }
/// ```
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

    /// Creates a client from a full [`Config`], e.g. to register an error hook.
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

    /// Retrieves title-wide key/value data.
    pub async fn get_title_data(
        &self,
        request: &GetTitleDataRequest,
    ) -> Result<GetTitleDataResult> {
        self.api.call(endpoints::GET_TITLE_DATA, request).await
    }

    /// Creates, updates or removes one key of title data.
    pub async fn set_title_data(&self, request: &SetTitleDataRequest) -> Result<EmptyResponse> {
        self.api.call(endpoints::SET_TITLE_DATA, request).await
    }

    /// Retrieves title data that game clients cannot read.
    pub async fn get_title_internal_data(
        &self,
        request: &GetTitleDataRequest,
    ) -> Result<GetTitleDataResult> {
        self.api.call(endpoints::GET_TITLE_INTERNAL_DATA, request).await
    }

    pub async fn set_title_internal_data(
        &self,
        request: &SetTitleDataRequest,
    ) -> Result<EmptyResponse> {
        self.api.call(endpoints::SET_TITLE_INTERNAL_DATA, request).await
    }

    /// Retrieves the account of a player by id, email, username or display name.
    pub async fn get_user_account_info(
        &self,
        request: &LookupUserAccountInfoRequest,
    ) -> Result<UserAccountInfoResult> {
        self.api.call(endpoints::GET_USER_ACCOUNT_INFO, request).await
    }

    pub async fn ban_users(&self, request: &BanUsersRequest) -> Result<BanUsersResult> {
        self.api.call(endpoints::BAN_USERS, request).await
    }

    pub async fn revoke_all_bans_for_user(
        &self,
        request: &RevokeAllBansForUserRequest,
    ) -> Result<RevokeAllBansForUserResult> {
        self.api.call(endpoints::REVOKE_ALL_BANS_FOR_USER, request).await
    }

    /// Deletes a player and everything stored for it. This cannot be undone.
    pub async fn delete_player(&self, request: &DeletePlayerRequest) -> Result<EmptyResponse> {
        self.api.call(endpoints::DELETE_PLAYER, request).await
    }
}
