//! Types for the PlayFab Matchmaker API.

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// Region a game server instance runs in.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, strum_macros::Display,
)]
pub enum Region {
    #[serde(rename = "USCentral")]
    #[strum(serialize = "USCentral")]
    UsCentral,
    #[serde(rename = "USEast")]
    #[strum(serialize = "USEast")]
    UsEast,
    #[serde(rename = "EUWest")]
    #[strum(serialize = "EUWest")]
    EuWest,
    Singapore,
    Japan,
    Brazil,
    Australia,
}
