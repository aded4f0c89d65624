//! PlayFab Admin API client and types.
//!
//! **Feature flag:** `admin` (required to use this module)
//!
//! The Admin API is meant for title management tools. Every call is authorised with the title's
//! developer secret key, sent in the `X-SecretKey` header, so it must never be shipped in a game
//! client.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/Admin/GetTitleData` | Read title-wide key/value data |
//! | `/Admin/SetTitleData` | Write or remove one title data key |
//! | `/Admin/GetTitleInternalData` | Read title data hidden from clients |
//! | `/Admin/SetTitleInternalData` | Write or remove one internal title data key |
//! | `/Admin/GetUserAccountInfo` | Look up a player account |
//! | `/Admin/BanUsers` | Ban players by id or IP address |
//! | `/Admin/RevokeAllBansForUser` | Lift every ban of a player |
//! | `/Admin/DeletePlayer` | Delete a player and all of its data |
//!
//! Any other `/Admin/*` endpoint can be reached through [`Client::api`].
//!
//! # Example
//!
//! ```no_run
//! use playfab_client_sdk::admin::{Client, types::request::SetTitleDataRequest};
//! use playfab_client_sdk::settings::ApiSettings;
//! use playfab_client_sdk::types::GetTitleDataRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads PLAYFAB_TITLE_ID and PLAYFAB_DEVELOPER_SECRET_KEY
//! let client = Client::new(ApiSettings::from_env())?;
//!
//! let request = SetTitleDataRequest::builder()
//!     .key("motd")
//!     .value("Welcome to season 3")
//!     .build();
//! client.set_title_data(&request).await?;
//!
//! let data = client
//!     .get_title_data(&GetTitleDataRequest::default())
//!     .await?;
//! println!("{:?}", data.data.get("motd"));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{Client, endpoints};
