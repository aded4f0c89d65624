#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[cfg(feature = "admin")]
pub mod admin;
pub mod api;
pub mod auth;
#[cfg(feature = "authentication")]
pub mod authentication;
#[cfg(feature = "client")]
pub mod client;
pub mod error;
#[cfg(feature = "matchmaker")]
pub mod matchmaker;
pub(crate) mod serde_helpers;
#[cfg(feature = "server")]
pub mod server;
pub mod settings;
pub mod types;

use reqwest::Client as ReqwestClient;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{Error, PlayFabError};

pub type Result<T> = std::result::Result<T, Error>;

/// Success body of every PlayFab call. `code` and `status` mirror the HTTP response and are not
/// kept.
#[derive(Deserialize)]
struct Envelope {
    data: Option<Value>,
}

/// POSTs `body` to `url` and returns the `data` member of the response envelope.
///
/// A non-success status is turned into a [`PlayFabError`]. When the body of such a response is not
/// a PlayFab error object, a `ServiceUnavailable` error carrying the raw body is reported instead.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, body, headers),
        fields(path = url.path(), status_code)
    )
)]
async fn request(
    client: &ReqwestClient,
    url: Url,
    body: &Value,
    headers: HeaderMap,
) -> Result<Value> {
    let response = client.post(url).headers(headers).json(body).send().await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let text = response.text().await?;

    if !status_code.is_success() {
        let error = serde_json::from_str::<PlayFabError>(&text)
            .unwrap_or_else(|_| PlayFabError::service_unavailable(status_code, text));

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            error = %error.error,
            error_code = error.error_code,
            message = %error.error_message,
            "PlayFab request failed"
        );

        return Err(error.into());
    }

    let envelope: Envelope = serde_json::from_str(&text)?;
    Ok(envelope.data.unwrap_or_else(|| Value::Object(Map::new())))
}
