//! Types for the PlayFab Admin API.
//!
//! Title data calls reuse [`GetTitleDataRequest`](crate::types::GetTitleDataRequest) and
//! [`GetTitleDataResult`](crate::types::GetTitleDataResult) from the crate root.

pub mod request;
pub mod response;
