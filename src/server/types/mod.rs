//! Types for the PlayFab Server API.

pub mod request;
pub mod response;
