//! PlayFab Authentication API client and types.
//!
//! **Feature flag:** `authentication` (required to use this module)
//!
//! Entity tokens authorise the entity programming model. A player gets one with every login; a
//! title server exchanges its developer secret key for a title entity token through
//! [`Client::get_entity_token`], which also stores the token on the client.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Credential | Description |
//! |----------|------------|-------------|
//! | `/Authentication/GetEntityToken` | entity token, session ticket or secret key | Issue an entity token |
//! | `/Authentication/ValidateEntityToken` | entity token | Inspect another entity's token |
//!
//! # Example
//!
//! ```no_run
//! use playfab_client_sdk::authentication::{Client, types::request::GetEntityTokenRequest};
//! use playfab_client_sdk::settings::ApiSettings;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Authorised with the developer secret key from the environment
//! let client = Client::new(ApiSettings::from_env())?;
//!
//! let token = client
//!     .get_entity_token(&GetEntityTokenRequest::default())
//!     .await?;
//! println!("expires at {:?}", token.token_expiration);
//! assert!(client.api().is_entity_logged_in());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{Client, endpoints};
