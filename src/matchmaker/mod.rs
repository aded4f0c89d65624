//! PlayFab Matchmaker API client and types.
//!
//! **Feature flag:** `matchmaker` (required to use this module)
//!
//! Used by custom matchmakers to authorise players, track lobby membership and start game server
//! instances. All calls are authorised with the developer secret key.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/Matchmaker/AuthUser` | Check a player's matchmaking ticket |
//! | `/Matchmaker/PlayerJoined` | Record that a player joined a lobby |
//! | `/Matchmaker/PlayerLeft` | Record that a player left a lobby |
//! | `/Matchmaker/StartGame` | Start a game server instance |
//! | `/Matchmaker/UserInfo` | Read a player's inventory and virtual currency |

pub mod client;
pub mod types;

pub use client::{Client, endpoints};
