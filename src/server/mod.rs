//! PlayFab Server API client and types.
//!
//! **Feature flag:** `server` (required to use this module)
//!
//! The Server API is called by trusted game servers and backends on behalf of players. Calls are
//! authorised with the developer secret key and name the player they act on by PlayFab id.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/Server/AuthenticateSessionTicket` | Check a ticket presented by a game client |
//! | `/Server/GetTitleData` | Read title-wide key/value data |
//! | `/Server/GetUserAccountInfo` | Read a player's account |
//! | `/Server/GetUserData` | Read a player's data |
//! | `/Server/UpdateUserData` | Write a player's data |
//! | `/Server/GetPlayerStatistics` | Read a player's statistics |
//! | `/Server/UpdatePlayerStatistics` | Write a player's statistics |
//! | `/Server/WritePlayerEvent` | Write a PlayStream event for a player |
//!
//! # Example
//!
//! ```no_run
//! use playfab_client_sdk::server::{Client, types::request::AuthenticateSessionTicketRequest};
//! use playfab_client_sdk::settings::ApiSettings;
//!
//! # async fn example(ticket_from_player: String) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ApiSettings::from_env())?;
//!
//! let request = AuthenticateSessionTicketRequest::builder()
//!     .session_ticket(ticket_from_player)
//!     .build();
//! let result = client.authenticate_session_ticket(&request).await?;
//! println!("{:?}", result.user_info.and_then(|info| info.play_fab_id));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{Client, endpoints};
