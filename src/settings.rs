//! Title-wide configuration shared by every API surface.

use std::env;
use std::time::Duration;

use bon::Builder;
use secrecy::SecretString;
use url::Url;

use crate::Result;
use crate::error::Error;

/// Environment variable read by [`ApiSettings::from_env`] for the title id.
pub const TITLE_ID_VAR: &str = "PLAYFAB_TITLE_ID";

/// Environment variable read by [`ApiSettings::from_env`] for the developer secret key.
pub const DEVELOPER_SECRET_KEY_VAR: &str = "PLAYFAB_DEVELOPER_SECRET_KEY";

/// Value sent in the `X-PlayFabSDK` header and the `sdk` query parameter.
pub const SDK_VERSION: &str = concat!("RustSdk-", env!("CARGO_PKG_VERSION"));

const DEFAULT_DOMAIN: &str = "playfabapi.com";

/// The kind of advertising identifier reported by the install attribution call.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum AdvertisingIdType {
    /// Apple identifier for advertisers, sent as `Idfa`.
    #[strum(serialize = "Idfa")]
    Idfa,
    /// Android advertising id, sent as `Adid`.
    #[strum(serialize = "Adid")]
    Adid,
}

/// Settings used to address and authorise calls for a title.
///
/// ```
/// use playfab_client_sdk::auth::SecretString;
/// use playfab_client_sdk::settings::{AdvertisingIdType, ApiSettings};
///
/// let settings = ApiSettings::builder()
///     .title_id("ABCD")
///     .developer_secret_key(SecretString::from("secret".to_owned()))
///     .advertising_id_type(AdvertisingIdType::Idfa)
///     .advertising_id_value("00000000-0000-0000-0000-000000000000")
///     .build();
/// assert_eq!(settings.title_id(), Some("ABCD"));
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Default, Builder)]
pub struct ApiSettings {
    /// The title id from the Game Manager. Required by every login call and by the default
    /// endpoint.
    #[builder(into)]
    title_id: Option<String>,
    /// Server-side credential for the Admin, Server and Matchmaker surfaces.
    developer_secret_key: Option<SecretString>,
    advertising_id_type: Option<AdvertisingIdType>,
    #[builder(into)]
    advertising_id_value: Option<String>,
    /// Suppresses the install attribution call after login.
    #[builder(default)]
    disable_advertising: bool,
    /// Overrides `https://{title_id}.playfabapi.com`, e.g. for a private cloud or a test server.
    #[builder(into)]
    endpoint: Option<String>,
    /// Applied to the underlying HTTP client when it is built by this SDK.
    request_timeout: Option<Duration>,
}

impl ApiSettings {
    /// Loads the title id and developer secret key from [`TITLE_ID_VAR`] and
    /// [`DEVELOPER_SECRET_KEY_VAR`]. Unset variables leave the setting empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            title_id: env::var(TITLE_ID_VAR).ok(),
            developer_secret_key: env::var(DEVELOPER_SECRET_KEY_VAR)
                .ok()
                .map(SecretString::from),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title_id(&self) -> Option<&str> {
        self.title_id.as_deref()
    }

    #[must_use]
    pub fn developer_secret_key(&self) -> Option<&SecretString> {
        self.developer_secret_key.as_ref()
    }

    #[must_use]
    pub fn advertising_id_type(&self) -> Option<AdvertisingIdType> {
        self.advertising_id_type
    }

    #[must_use]
    pub fn advertising_id_value(&self) -> Option<&str> {
        self.advertising_id_value.as_deref()
    }

    #[must_use]
    pub fn disable_advertising(&self) -> bool {
        self.disable_advertising
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// The advertising id to attribute with, when advertising is enabled and both the id type
    /// and a non-empty id value are configured.
    #[must_use]
    pub fn advertising_id(&self) -> Option<(AdvertisingIdType, &str)> {
        if self.disable_advertising {
            return None;
        }
        let kind = self.advertising_id_type?;
        let value = self.advertising_id_value.as_deref()?;
        (!value.is_empty()).then_some((kind, value))
    }

    /// Builds the absolute URL for an API path such as `/Client/LoginWithCustomID`.
    ///
    /// The path is appended to any path the endpoint override already has.
    pub fn url(&self, path: &str) -> Result<Url> {
        let mut base = match (&self.endpoint, &self.title_id) {
            (Some(endpoint), _) => Url::parse(endpoint)?,
            (None, Some(title_id)) if !title_id.is_empty() => {
                Url::parse(&format!("https://{title_id}.{DEFAULT_DOMAIN}"))?
            }
            (None, _) => {
                return Err(Error::validation(
                    "Must be have TitleId set to call this method",
                ));
            }
        };

        if !base.path().ends_with('/') {
            let prefix = format!("{}/", base.path());
            base.set_path(&prefix);
        }

        let mut url = base.join(path.trim_start_matches('/'))?;
        url.query_pairs_mut().append_pair("sdk", SDK_VERSION);
        Ok(url)
    }
}
