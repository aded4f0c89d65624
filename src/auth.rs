//! Session credentials and the rules for attaching them to requests.

use bon::bon;
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};

use crate::Result;
use crate::error::Error;
use crate::settings::ApiSettings;

pub(crate) const X_SECRET_KEY: &str = "X-SecretKey";
pub(crate) const X_AUTHORIZATION: &str = "X-Authorization";
pub(crate) const X_ENTITY_TOKEN: &str = "X-EntityToken";

/// Credentials of a logged in player or entity. Login calls fill this in on the client that made
/// them. It can also be built by hand to act on behalf of a known session.
///
/// ```
/// use playfab_client_sdk::auth::AuthenticationContext;
///
/// let mut context = AuthenticationContext::builder()
///     .session_ticket("ticket")
///     .play_fab_id("A1B2C3")
///     .build();
/// assert!(context.is_client_logged_in());
///
/// context.forget_all_credentials();
/// assert!(!context.is_client_logged_in());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AuthenticationContext {
    session_ticket: Option<SecretString>,
    entity_token: Option<SecretString>,
    play_fab_id: Option<String>,
    entity_id: Option<String>,
    entity_type: Option<String>,
}

#[bon]
impl AuthenticationContext {
    #[builder]
    pub fn new(
        #[builder(into)] session_ticket: Option<String>,
        #[builder(into)] entity_token: Option<String>,
        #[builder(into)] play_fab_id: Option<String>,
        #[builder(into)] entity_id: Option<String>,
        #[builder(into)] entity_type: Option<String>,
    ) -> Self {
        Self {
            session_ticket: session_ticket.map(SecretString::from),
            entity_token: entity_token.map(SecretString::from),
            play_fab_id,
            entity_id,
            entity_type,
        }
    }
}

impl AuthenticationContext {
    #[must_use]
    pub fn session_ticket(&self) -> Option<&SecretString> {
        self.session_ticket.as_ref()
    }

    #[must_use]
    pub fn entity_token(&self) -> Option<&SecretString> {
        self.entity_token.as_ref()
    }

    #[must_use]
    pub fn play_fab_id(&self) -> Option<&str> {
        self.play_fab_id.as_deref()
    }

    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    #[must_use]
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    /// Whether a session ticket is held.
    #[must_use]
    pub fn is_client_logged_in(&self) -> bool {
        self.session_ticket.is_some()
    }

    /// Whether an entity token is held.
    #[must_use]
    pub fn is_entity_logged_in(&self) -> bool {
        self.entity_token.is_some()
    }

    /// Clears every credential and identifier.
    pub fn forget_all_credentials(&mut self) {
        *self = Self::default();
    }

    /// Replaces the entity part of the context, leaving the session ticket and PlayFab id alone.
    pub(crate) fn set_entity(
        &mut self,
        entity_token: Option<String>,
        entity_id: Option<String>,
        entity_type: Option<String>,
    ) {
        self.entity_token = entity_token.map(SecretString::from);
        self.entity_id = entity_id;
        self.entity_type = entity_type;
    }
}

/// Which credential an endpoint requires, and therefore which header carries it.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credential {
    /// Login and other public endpoints.
    None,
    /// `X-SecretKey`, from [`ApiSettings`].
    SecretKey,
    /// `X-Authorization`, from the [`AuthenticationContext`].
    SessionTicket,
    /// `X-EntityToken`, from the [`AuthenticationContext`].
    EntityToken,
    /// The first available of entity token, session ticket and secret key.
    Any,
}

impl Credential {
    /// Resolves the header to send for this credential, failing before any request is made when
    /// the credential is not available.
    pub(crate) fn header(
        self,
        settings: &ApiSettings,
        context: &AuthenticationContext,
    ) -> Result<Option<(&'static str, String)>> {
        let secret_key = || {
            settings
                .developer_secret_key()
                .map(|key| (X_SECRET_KEY, key.expose_secret().to_owned()))
        };
        let session_ticket = || {
            context
                .session_ticket()
                .map(|ticket| (X_AUTHORIZATION, ticket.expose_secret().to_owned()))
        };
        let entity_token = || {
            context
                .entity_token()
                .map(|token| (X_ENTITY_TOKEN, token.expose_secret().to_owned()))
        };

        let header = match self {
            Credential::None => return Ok(None),
            Credential::SecretKey => secret_key().ok_or_else(|| {
                Error::not_authenticated("Must have DeveloperSecretKey set to call this method")
            })?,
            Credential::SessionTicket => session_ticket().ok_or_else(|| {
                Error::not_authenticated("Must be logged in to call this method")
            })?,
            Credential::EntityToken => entity_token().ok_or_else(|| {
                Error::not_authenticated("Must call GetEntityToken before calling this method")
            })?,
            Credential::Any => entity_token()
                .or_else(session_ticket)
                .or_else(secret_key)
                .ok_or_else(|| {
                    Error::not_authenticated(
                        "Must call Client Login or GetEntityToken before calling this method",
                    )
                })?,
        };

        Ok(Some(header))
    }
}
