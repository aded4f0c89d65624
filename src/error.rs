use std::backtrace::Backtrace;
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;
use serde::Deserialize;

/// PlayFab's `ServiceUnavailable` error code, used when a failed response carries no error body.
pub const SERVICE_UNAVAILABLE_CODE: i32 = 1123;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The PlayFab service answered with an error object
    Api,
    /// A required credential (secret key, session ticket, entity token) was not available
    Authentication,
    /// Error related to invalid state within playfab-client-sdk, e.g. a missing title id
    Validation,
    /// Internal error from dependencies, including transport failures
    Internal,
}

impl Kind {
    /// Whether this kind is raised locally before any request is sent.
    #[must_use]
    pub fn is_precondition(self) -> bool {
        matches!(self, Kind::Authentication | Kind::Validation)
    }
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// Returns the [`PlayFabError`] reported by the service, if this is a [`Kind::Api`] error.
    #[must_use]
    pub fn api_error(&self) -> Option<&PlayFabError> {
        self.downcast_ref::<PlayFabError>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn not_authenticated<S: Into<String>>(message: S) -> Self {
        NotAuthenticated {
            reason: message.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Error object returned by the PlayFab service for a failed call.
///
/// ```json
/// {
///   "code": 400,
///   "status": "BadRequest",
///   "error": "InvalidParams",
///   "errorCode": 1000,
///   "errorMessage": "Invalid input parameters",
///   "errorDetails": { "CustomId": ["The CustomId field is required."] }
/// }
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayFabError {
    /// HTTP status code of the response.
    #[serde(rename = "code")]
    pub http_code: u16,
    /// HTTP status text of the response.
    #[serde(rename = "status", default)]
    pub http_status: String,
    /// Symbolic PlayFab error name, e.g. `AccountNotFound`.
    pub error: String,
    /// Numeric PlayFab error code.
    pub error_code: i32,
    #[serde(default)]
    pub error_message: String,
    /// Per-field validation messages.
    pub error_details: Option<HashMap<String, Vec<String>>>,
}

impl PlayFabError {
    /// Builds the error reported for a failed response whose body is not a PlayFab error object.
    #[must_use]
    pub fn service_unavailable(status_code: StatusCode, message: String) -> Self {
        Self {
            http_code: status_code.as_u16(),
            http_status: status_code
                .canonical_reason()
                .unwrap_or_default()
                .to_owned(),
            error: "ServiceUnavailable".to_owned(),
            error_code: SERVICE_UNAVAILABLE_CODE,
            error_message: message,
            error_details: None,
        }
    }

    /// Renders the error message followed by every per-field detail line.
    #[must_use]
    pub fn generate_error_report(&self) -> String {
        let mut report = self.error_message.clone();
        if let Some(details) = &self.error_details {
            let mut fields: Vec<_> = details.iter().collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));
            for (field, messages) in fields {
                for message in messages {
                    report.push('\n');
                    report.push_str(field);
                    report.push_str(": ");
                    report.push_str(message);
                }
            }
        }
        report
    }
}

impl fmt::Display for PlayFabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({} {}) {} ({}): {}",
            self.http_code, self.http_status, self.error, self.error_code, self.error_message
        )
    }
}

impl StdError for PlayFabError {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

#[non_exhaustive]
#[derive(Debug)]
pub struct NotAuthenticated {
    pub reason: String,
}

impl fmt::Display for NotAuthenticated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not authenticated: {}", self.reason)
    }
}

impl StdError for NotAuthenticated {}

impl From<PlayFabError> for Error {
    fn from(err: PlayFabError) -> Self {
        Error::with_source(Kind::Api, err)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<NotAuthenticated> for Error {
    fn from(err: NotAuthenticated) -> Self {
        Error::with_source(Kind::Authentication, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<header::InvalidHeaderName> for Error {
    fn from(e: header::InvalidHeaderName) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn play_fab_error_deserializes_from_wire_shape() -> crate::Result<()> {
        let error: PlayFabError = serde_json::from_value(json!({
            "code": 400,
            "status": "BadRequest",
            "error": "InvalidParams",
            "errorCode": 1000,
            "errorMessage": "Invalid input parameters",
            "errorDetails": { "CustomId": ["The CustomId field is required."] }
        }))?;

        assert_eq!(error.http_code, 400);
        assert_eq!(error.error, "InvalidParams");
        assert_eq!(error.error_code, 1000);
        assert_eq!(
            error.generate_error_report(),
            "Invalid input parameters\nCustomId: The CustomId field is required."
        );

        Ok(())
    }

    #[test]
    fn service_unavailable_uses_status_reason() {
        let error =
            PlayFabError::service_unavailable(StatusCode::BAD_GATEWAY, "upstream".to_owned());

        assert_eq!(error.http_code, 502);
        assert_eq!(error.http_status, "Bad Gateway");
        assert_eq!(error.error_code, SERVICE_UNAVAILABLE_CODE);
        assert_eq!(error.generate_error_report(), "upstream");
    }

    #[test]
    fn play_fab_error_into_error_should_succeed() {
        let error: Error = PlayFabError {
            http_code: 404,
            error: "AccountNotFound".to_owned(),
            ..PlayFabError::default()
        }
        .into();

        assert_eq!(error.kind(), Kind::Api);
        assert_eq!(
            error.api_error().map(|e| e.error.as_str()),
            Some("AccountNotFound")
        );
        assert!(error.to_string().contains("AccountNotFound"));
    }

    #[test]
    fn precondition_kinds() {
        assert!(Error::not_authenticated("x").kind().is_precondition());
        assert!(Error::validation("x").kind().is_precondition());
        assert!(!Kind::Api.is_precondition());
        assert!(!Kind::Internal.is_precondition());
    }
}
