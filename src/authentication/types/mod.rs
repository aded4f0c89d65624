//! Types for the PlayFab Authentication API.
//!
//! `GetEntityToken` returns the shared [`EntityTokenResponse`](crate::types::EntityTokenResponse).

pub mod request;
pub mod response;
