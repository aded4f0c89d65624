//! The call path shared by every API surface.
//!
//! Each surface client (`admin::Client`, `client::Client`, ...) is a thin, typed layer over an
//! [`Api`]. An [`Api`] owns the settings, the HTTP client, the authentication context and the
//! optional error hook. Every endpoint goes through [`Api::call_with`], which:
//!
//! 1. resolves the endpoint's [`Credential`] from the call's [`CallOptions`] or the [`Api`]
//!    defaults, failing before any network access when it is missing,
//! 2. POSTs the JSON body to the endpoint path,
//! 3. reports transport and remote failures to the error hook,
//! 4. applies the endpoint's [`OnSuccess`] effect, e.g. storing the session of a login.
//!
//! Endpoints this SDK does not model can be reached with your own serde types:
//!
//! ```no_run
//! use playfab_client_sdk::api::{Api, CallOptions, Config, Endpoint};
//! use playfab_client_sdk::auth::Credential;
//! use playfab_client_sdk::settings::ApiSettings;
//! use serde_json::{Value, json};
//!
//! # async fn example() -> playfab_client_sdk::Result<()> {
//! let api = Api::new(Config::builder().settings(ApiSettings::from_env()).build())?;
//!
//! const GET_TIME: Endpoint = Endpoint::new("/Client/GetTime", Credential::SessionTicket);
//! let response = api
//!     .call_with::<_, Value, _>(GET_TIME, &json!({}), CallOptions::with_custom_data(7_u32))
//!     .await;
//!
//! assert_eq!(response.custom_data, 7);
//! println!("{:?}", response.result?);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bon::Builder;
use reqwest::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize as _, Serialize};
use serde_json::Value;
#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use crate::auth::{AuthenticationContext, Credential, X_AUTHORIZATION};
use crate::error::Error;
use crate::settings::{AdvertisingIdType, ApiSettings, SDK_VERSION};
use crate::types::{AttributeInstallRequest, EntityTokenResponse, LoginResult};
use crate::{Result, serde_helpers};

const X_PLAYFAB_SDK: &str = "X-PlayFabSDK";
const TITLE_ID: &str = "TitleId";

/// Called once for every failed remote call, after the transport or the service reported the
/// failure. Precondition failures (missing credentials or title id) are not reported.
pub type ErrorHook = Arc<dyn Fn(&Error) + Send + Sync>;

/// What a successful call changes on the [`Api`] that made it.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnSuccess {
    Nothing,
    /// Stores the returned session as the authentication context, then reports install
    /// attribution if the service asks for it.
    Login,
    /// Stores the returned entity token, entity id and entity type.
    EntityToken,
}

/// Fixed description of a remote procedure.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Path below the title endpoint, e.g. `/Client/GetTitleData`.
    pub path: &'static str,
    pub credential: Credential,
    pub on_success: OnSuccess,
}

impl Endpoint {
    #[must_use]
    pub const fn new(path: &'static str, credential: Credential) -> Self {
        Self {
            path,
            credential,
            on_success: OnSuccess::Nothing,
        }
    }

    /// A login-family endpoint: sent without credentials, with the title id filled into the body.
    #[must_use]
    pub const fn login(path: &'static str) -> Self {
        Self {
            path,
            credential: Credential::None,
            on_success: OnSuccess::Login,
        }
    }

    #[must_use]
    pub const fn with_effect(mut self, on_success: OnSuccess) -> Self {
        self.on_success = on_success;
        self
    }
}

pub(crate) const ATTRIBUTE_INSTALL: Endpoint =
    Endpoint::new("/Client/AttributeInstall", Credential::SessionTicket);

/// Construction-time configuration of an [`Api`].
#[derive(Clone, Default, Builder)]
pub struct Config {
    #[builder(default)]
    settings: ApiSettings,
    error_hook: Option<ErrorHook>,
    /// A preconfigured HTTP client. When unset, one is built honouring
    /// [`ApiSettings::request_timeout`].
    http_client: Option<ReqwestClient>,
    /// Credentials of an existing session to start from.
    authentication_context: Option<AuthenticationContext>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("settings", &self.settings)
            .field("error_hook", &self.error_hook.is_some())
            .field("http_client", &self.http_client)
            .field("authentication_context", &self.authentication_context)
            .finish()
    }
}

/// Per-call inputs besides the request body.
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct CallOptions<C = ()> {
    /// Handed back untouched in [`ApiResult::custom_data`].
    pub custom_data: C,
    /// Sent in addition to the SDK and credential headers.
    pub extra_headers: HeaderMap,
    /// Replaces the [`Api`] settings for this call only.
    pub settings: Option<ApiSettings>,
    /// Replaces the [`Api`] authentication context for this call only.
    pub authentication_context: Option<AuthenticationContext>,
}

impl CallOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> CallOptions<C> {
    #[must_use]
    pub fn with_custom_data(custom_data: C) -> Self {
        Self {
            custom_data,
            extra_headers: HeaderMap::new(),
            settings: None,
            authentication_context: None,
        }
    }

    #[must_use]
    pub fn extra_headers(mut self, headers: HeaderMap) -> Self {
        self.extra_headers = headers;
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: ApiSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    #[must_use]
    pub fn authentication_context(mut self, context: AuthenticationContext) -> Self {
        self.authentication_context = Some(context);
        self
    }
}

/// Outcome of a call together with the caller's custom data.
#[allow(
    clippy::module_name_repetitions,
    reason = "Reads better than `api::Result` next to `crate::Result`"
)]
#[non_exhaustive]
#[derive(Debug)]
pub struct ApiResult<T, C = ()> {
    pub result: Result<T>,
    pub custom_data: C,
}

impl<T, C> ApiResult<T, C> {
    pub fn into_result(self) -> Result<T> {
        self.result
    }
}

/// Shared core of the API surface clients. Cloning is cheap and clones share the same
/// authentication context.
#[derive(Clone)]
pub struct Api {
    inner: Arc<ApiInner>,
}

struct ApiInner {
    settings: ApiSettings,
    client: ReqwestClient,
    context: RwLock<AuthenticationContext>,
    error_hook: Option<ErrorHook>,
    /// Set once an install attribution call has succeeded, so it is never repeated.
    attributed: AtomicBool,
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("settings", &self.inner.settings)
            .field("context", &*self.context())
            .field("error_hook", &self.inner.error_hook.is_some())
            .finish_non_exhaustive()
    }
}

impl Api {
    pub fn new(config: Config) -> Result<Api> {
        let client = match config.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                headers.insert(USER_AGENT, HeaderValue::from_static(SDK_VERSION));

                let mut builder = ReqwestClient::builder().default_headers(headers);
                if let Some(timeout) = config.settings.request_timeout() {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Self {
            inner: Arc::new(ApiInner {
                settings: config.settings,
                client,
                context: RwLock::new(config.authentication_context.unwrap_or_default()),
                error_hook: config.error_hook,
                attributed: AtomicBool::new(false),
            }),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &ApiSettings {
        &self.inner.settings
    }

    /// Returns a copy of the current authentication context.
    #[must_use]
    pub fn authentication_context(&self) -> AuthenticationContext {
        self.context().clone()
    }

    /// Replaces the authentication context, e.g. to resume a session stored elsewhere.
    pub fn set_authentication_context(&self, context: AuthenticationContext) {
        *self.context_mut() = context;
    }

    #[must_use]
    pub fn is_client_logged_in(&self) -> bool {
        self.context().is_client_logged_in()
    }

    #[must_use]
    pub fn is_entity_logged_in(&self) -> bool {
        self.context().is_entity_logged_in()
    }

    /// Logs out by clearing every credential of the authentication context.
    pub fn forget_all_credentials(&self) {
        self.context_mut().forget_all_credentials();
    }

    /// Calls `endpoint` with the [`Api`] defaults and returns just the result.
    pub async fn call<Req, Res>(&self, endpoint: Endpoint, request: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        self.call_with(endpoint, request, CallOptions::new())
            .await
            .into_result()
    }

    /// Calls `endpoint`, applying `options`, and returns the result with the custom data.
    pub async fn call_with<Req, Res, C>(
        &self,
        endpoint: Endpoint,
        request: &Req,
        options: CallOptions<C>,
    ) -> ApiResult<Res, C>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let CallOptions {
            custom_data,
            extra_headers,
            settings,
            authentication_context,
        } = options;

        let result = self
            .call_endpoint(
                endpoint,
                request,
                extra_headers,
                settings.as_ref(),
                authentication_context,
            )
            .await;

        ApiResult {
            result,
            custom_data,
        }
    }

    async fn call_endpoint<Req, Res>(
        &self,
        endpoint: Endpoint,
        request: &Req,
        extra_headers: HeaderMap,
        settings: Option<&ApiSettings>,
        context: Option<AuthenticationContext>,
    ) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let settings = settings.unwrap_or(&self.inner.settings);
        let context = context.unwrap_or_else(|| self.authentication_context());

        let credential = endpoint.credential.header(settings, &context)?;
        let body = request_body(endpoint, request, settings)?;
        let url = settings.url(endpoint.path)?;

        let mut headers = HeaderMap::new();
        headers.insert(X_PLAYFAB_SDK, HeaderValue::from_static(SDK_VERSION));
        if let Some((name, value)) = credential {
            headers.insert(name, value.parse()?);
        }
        headers.extend(extra_headers);

        let data = crate::request(&self.inner.client, url, &body, headers)
            .await
            .inspect_err(|e| self.report(e))?;

        match endpoint.on_success {
            OnSuccess::Nothing => {}
            OnSuccess::Login => {
                let login = LoginResult::deserialize(&data)
                    .map_err(Error::from)
                    .inspect_err(|e| self.report(e))?;
                self.complete_login(&login, settings).await;
            }
            OnSuccess::EntityToken => {
                let token = EntityTokenResponse::deserialize(&data)
                    .map_err(Error::from)
                    .inspect_err(|e| self.report(e))?;
                self.store_entity_token(token);
            }
        }

        serde_helpers::deserialize_with_warnings(data).inspect_err(|e| self.report(e))
    }

    /// Stores the session of a login response, then reports install attribution when needed.
    ///
    /// A response without a session ticket leaves the current session in place.
    async fn complete_login(&self, login: &LoginResult, settings: &ApiSettings) {
        let Some(session_ticket) = login.session_ticket.as_deref() else {
            #[cfg(feature = "tracing")]
            warn!(play_fab_id = ?login.play_fab_id, "login response carried no session ticket");
            return;
        };

        let entity = login.entity_token.as_ref();
        let entity_key = entity.and_then(|token| token.entity.as_ref());

        let context = AuthenticationContext::builder()
            .session_ticket(session_ticket)
            .maybe_entity_token(entity.and_then(|token| token.entity_token.clone()))
            .maybe_play_fab_id(login.play_fab_id.clone())
            .maybe_entity_id(entity_key.map(|key| key.id.clone()))
            .maybe_entity_type(entity_key.and_then(|key| key.kind.clone()))
            .build();

        #[cfg(feature = "tracing")]
        debug!(
            play_fab_id = ?context.play_fab_id(),
            entity_id = ?context.entity_id(),
            "stored login session"
        );

        self.set_authentication_context(context);

        if !login.needs_attribution() || self.inner.attributed.load(Ordering::Acquire) {
            return;
        }
        let Some((kind, value)) = settings.advertising_id() else {
            return;
        };

        match self
            .attribute_install(settings, session_ticket, kind, value)
            .await
        {
            Ok(()) => self.inner.attributed.store(true, Ordering::Release),
            Err(e) => {
                #[cfg(feature = "tracing")]
                warn!(error = %e, "install attribution failed");
                #[cfg(not(feature = "tracing"))]
                let _ = &e;
            }
        }
    }

    /// Reports the advertising id with the session ticket of a login that just completed. This
    /// bypasses [`Self::call_endpoint`] because the new ticket must be used even when the caller
    /// overrode the context for the login itself.
    async fn attribute_install(
        &self,
        settings: &ApiSettings,
        session_ticket: &str,
        kind: AdvertisingIdType,
        value: &str,
    ) -> Result<()> {
        let request = match kind {
            AdvertisingIdType::Idfa => AttributeInstallRequest::builder().idfa(value).build(),
            AdvertisingIdType::Adid => AttributeInstallRequest::builder().adid(value).build(),
        };
        let body = serde_json::to_value(&request)?;
        let url = settings.url(ATTRIBUTE_INSTALL.path)?;

        let mut headers = HeaderMap::new();
        headers.insert(X_PLAYFAB_SDK, HeaderValue::from_static(SDK_VERSION));
        headers.insert(X_AUTHORIZATION, session_ticket.parse()?);

        crate::request(&self.inner.client, url, &body, headers)
            .await
            .inspect_err(|e| self.report(e))?;

        Ok(())
    }

    fn store_entity_token(&self, token: EntityTokenResponse) {
        let (entity_id, entity_type) = match token.entity {
            Some(key) => (Some(key.id), key.kind),
            None => (None, None),
        };

        #[cfg(feature = "tracing")]
        debug!(entity_id = ?entity_id, entity_type = ?entity_type, "stored entity token");

        self.context_mut()
            .set_entity(token.entity_token, entity_id, entity_type);
    }

    fn report(&self, error: &Error) {
        if let Some(hook) = &self.inner.error_hook {
            hook(error);
        }
    }

    fn context(&self) -> RwLockReadGuard<'_, AuthenticationContext> {
        self.inner
            .context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn context_mut(&self) -> RwLockWriteGuard<'_, AuthenticationContext> {
        self.inner
            .context
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Serializes the request. Login bodies get the title id from `settings` unless the request
/// already carries one.
fn request_body<Req: Serialize + ?Sized>(
    endpoint: Endpoint,
    request: &Req,
    settings: &ApiSettings,
) -> Result<Value> {
    let mut body = serde_json::to_value(request)?;

    if endpoint.on_success == OnSuccess::Login {
        let Value::Object(fields) = &mut body else {
            return Err(Error::validation("Login requests must be JSON objects"));
        };

        let has_title_id = fields
            .get(TITLE_ID)
            .and_then(Value::as_str)
            .is_some_and(|title_id| !title_id.is_empty());

        if !has_title_id {
            let title_id = settings
                .title_id()
                .filter(|title_id| !title_id.is_empty())
                .ok_or_else(|| {
                    Error::validation("Must be have TitleId set to call this method")
                })?;
            fields.insert(TITLE_ID.to_owned(), Value::String(title_id.to_owned()));
        }
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Kind;

    const LOGIN: Endpoint = Endpoint::login("/Client/LoginWithCustomID");
    const PLAIN: Endpoint = Endpoint::new("/Client/GetTitleData", Credential::SessionTicket);

    #[test]
    fn login_body_gets_title_id_from_settings() -> Result<()> {
        let settings = ApiSettings::builder().title_id("ABCD").build();
        let body = request_body(LOGIN, &json!({ "CustomId": "player" }), &settings)?;

        assert_eq!(body, json!({ "CustomId": "player", "TitleId": "ABCD" }));
        Ok(())
    }

    #[test]
    fn login_body_keeps_its_own_title_id() -> Result<()> {
        let settings = ApiSettings::builder().title_id("ABCD").build();
        let body = request_body(LOGIN, &json!({ "TitleId": "WXYZ" }), &settings)?;

        assert_eq!(body, json!({ "TitleId": "WXYZ" }));
        Ok(())
    }

    #[test]
    fn login_body_without_title_id_should_fail() {
        let err = request_body(LOGIN, &json!({ "CustomId": "player" }), &ApiSettings::default())
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("TitleId"));
    }

    #[test]
    fn other_bodies_are_left_alone() -> Result<()> {
        let body = request_body(PLAIN, &json!({ "Keys": ["a"] }), &ApiSettings::default())?;

        assert_eq!(body, json!({ "Keys": ["a"] }));
        Ok(())
    }

    #[test]
    fn endpoint_constructors() {
        assert_eq!(LOGIN.credential, Credential::None);
        assert_eq!(LOGIN.on_success, OnSuccess::Login);
        assert_eq!(PLAIN.on_success, OnSuccess::Nothing);
        assert_eq!(
            Endpoint::new("/Authentication/GetEntityToken", Credential::Any)
                .with_effect(OnSuccess::EntityToken)
                .on_success,
            OnSuccess::EntityToken
        );
    }

    #[test]
    fn context_is_shared_between_clones() -> Result<()> {
        let api = Api::new(Config::default())?;
        let clone = api.clone();

        api.set_authentication_context(
            AuthenticationContext::builder()
                .session_ticket("ticket")
                .build(),
        );
        assert!(clone.is_client_logged_in());

        clone.forget_all_credentials();
        assert!(!api.is_client_logged_in());
        Ok(())
    }

    #[test]
    fn store_entity_token_keeps_session_ticket() -> Result<()> {
        let api = Api::new(
            Config::builder()
                .authentication_context(
                    AuthenticationContext::builder()
                        .session_ticket("ticket")
                        .build(),
                )
                .build(),
        )?;

        let token: EntityTokenResponse = serde_json::from_value(json!({
            "EntityToken": "token",
            "Entity": { "Id": "E1", "Type": "title_player_account" }
        }))?;
        api.store_entity_token(token);

        let context = api.authentication_context();
        assert!(context.is_client_logged_in());
        assert!(context.is_entity_logged_in());
        assert_eq!(context.entity_id(), Some("E1"));
        assert_eq!(context.entity_type(), Some("title_player_account"));
        Ok(())
    }

    #[test]
    fn call_options_builders() {
        let options = CallOptions::with_custom_data("tag")
            .settings(ApiSettings::builder().title_id("ABCD").build())
            .authentication_context(AuthenticationContext::default());

        assert_eq!(options.custom_data, "tag");
        assert!(options.settings.is_some());
        assert!(options.authentication_context.is_some());
        assert!(options.extra_headers.is_empty());
    }
}
