//! PlayFab Client API client and types.
//!
//! **Feature flag:** `client` (required to use this module)
//!
//! The Client API is what a game ships with. Players log in through one of the `LoginWith*`
//! calls (or register with [`Client::register_play_fab_user`]). A successful login stores the
//! returned session ticket and entity token on the client, and every other call is then
//! authorised with that ticket in the `X-Authorization` header.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Credential | Description |
//! |----------|------------|-------------|
//! | `/Client/LoginWithCustomID` | none | Log in with a title-specific id |
//! | `/Client/LoginWithEmailAddress` | none | Log in with email and password |
//! | `/Client/LoginWithPlayFab` | none | Log in with username and password |
//! | `/Client/LoginWithAndroidDeviceID` | none | Log in with an Android device id |
//! | `/Client/LoginWithIOSDeviceID` | none | Log in with an iOS device id |
//! | `/Client/RegisterPlayFabUser` | none | Create a username/password account |
//! | `/Client/AttributeInstall` | session ticket | Report the install's advertising id |
//! | `/Client/GetAccountInfo` | session ticket | Read the player's account |
//! | `/Client/GetTitleData` | session ticket | Read title-wide key/value data |
//! | `/Client/GetUserData` | session ticket | Read player data |
//! | `/Client/UpdateUserData` | session ticket | Write player data |
//! | `/Client/GetPlayerStatistics` | session ticket | Read player statistics |
//! | `/Client/UpdatePlayerStatistics` | session ticket | Write player statistics |
//! | `/Client/WritePlayerEvent` | session ticket | Write a PlayStream event |
//! | `/Client/GetTitleNews` | session ticket | Read title news |
//! | `/Client/ExecuteCloudScript` | session ticket | Run a CloudScript function |
//!
//! # Install attribution
//!
//! When a login response says the player needs attribution and the settings carry an advertising
//! id type and value, the client reports the id once through `/Client/AttributeInstall`. A
//! failure there is logged and does not fail the login. Set
//! [`ApiSettings::disable_advertising`](crate::settings::ApiSettings::disable_advertising) to turn
//! this off.
//!
//! # Example
//!
//! ```no_run
//! use playfab_client_sdk::client::{Client, types::request::LoginWithCustomIdRequest};
//! use playfab_client_sdk::settings::ApiSettings;
//! use playfab_client_sdk::types::GetTitleDataRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ApiSettings::builder().title_id("ABCD").build())?;
//!
//! let login = LoginWithCustomIdRequest::builder()
//!     .custom_id("player-1")
//!     .create_account(true)
//!     .build();
//! let session = client.login_with_custom_id(&login).await?;
//! println!("logged in as {:?}", session.play_fab_id);
//! assert!(client.is_client_logged_in());
//!
//! let data = client.get_title_data(&GetTitleDataRequest::default()).await?;
//! println!("{:?}", data.data);
//!
//! client.forget_all_credentials();
//! # Ok(())
//! # }
//! ```
//!
//! # Per-call options
//!
//! The typed methods send nothing but the request. To add headers or get custom data back, pass
//! the matching constant from [`endpoints`] to [`Api::call_with`](crate::api::Api::call_with):
//!
//! ```no_run
//! use playfab_client_sdk::api::CallOptions;
//! use playfab_client_sdk::client::{Client, endpoints};
//! use playfab_client_sdk::types::{GetTitleDataRequest, GetTitleDataResult};
//!
//! # async fn example(client: Client) {
//! let response = client
//!     .api()
//!     .call_with::<_, GetTitleDataResult, _>(
//!         endpoints::GET_TITLE_DATA,
//!         &GetTitleDataRequest::default(),
//!         CallOptions::with_custom_data("season"),
//!     )
//!     .await;
//! println!("{}: {:?}", response.custom_data, response.result);
//! # }
//! ```

#[expect(
    clippy::module_inception,
    reason = "Every surface keeps its client in `client.rs`"
)]
pub mod client;
pub mod types;

pub use client::{Client, endpoints};
