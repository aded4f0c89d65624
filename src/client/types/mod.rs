//! Types for the PlayFab Client API.
//!
//! Every login call returns the shared [`LoginResult`](crate::types::LoginResult).
//!
//! ```
//! use playfab_client_sdk::client::types::request::{GetUserDataRequest, UpdateUserDataRequest};
//! use playfab_client_sdk::types::UserDataPermission;
//!
//! let read = GetUserDataRequest::builder()
//!     .keys(vec!["loadout".to_owned()])
//!     .build();
//!
//! let write = UpdateUserDataRequest::builder()
//!     .data([("loadout".to_owned(), "sword".to_owned())].into())
//!     .permission(UserDataPermission::Public)
//!     .build();
//! ```

pub mod request;
pub mod response;
