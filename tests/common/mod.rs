#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Each test binary uses a different subset of the fixtures"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use httpmock::MockServer;
use playfab_client_sdk::api::ErrorHook;
use playfab_client_sdk::auth::{AuthenticationContext, SecretString};
use playfab_client_sdk::error::Error;
use playfab_client_sdk::settings::ApiSettings;
use serde_json::{Value, json};

pub const TITLE_ID: &str = "ABCD";
pub const SECRET_KEY: &str = "developer-secret-key";
pub const SESSION_TICKET: &str = "A1B2C3---ABCD-8D9C3B2E1F0A-session";
pub const ENTITY_TOKEN: &str = "NHxlbnRpdHktdG9rZW4=";
pub const PLAY_FAB_ID: &str = "A1B2C3";
pub const ENTITY_ID: &str = "E1F2A3B4";
pub const ENTITY_TYPE: &str = "title_player_account";
pub const ADVERTISING_ID: &str = "6D92078A-8246-4BA4-AE5B-76104861E7DC";

pub const X_PLAYFAB_SDK: &str = "X-PlayFabSDK";
pub const X_SECRET_KEY: &str = "X-SecretKey";
pub const X_AUTHORIZATION: &str = "X-Authorization";
pub const X_ENTITY_TOKEN: &str = "X-EntityToken";

/// Title settings pointed at the mock server, without a secret key.
pub fn settings(server: &MockServer) -> ApiSettings {
    ApiSettings::builder()
        .title_id(TITLE_ID)
        .endpoint(server.base_url())
        .build()
}

pub fn settings_with_secret_key(server: &MockServer) -> ApiSettings {
    ApiSettings::builder()
        .title_id(TITLE_ID)
        .endpoint(server.base_url())
        .developer_secret_key(SecretString::from(SECRET_KEY.to_owned()))
        .build()
}

pub fn logged_in_context() -> AuthenticationContext {
    AuthenticationContext::builder()
        .session_ticket(SESSION_TICKET)
        .play_fab_id(PLAY_FAB_ID)
        .build()
}

/// Wraps `data` in the success envelope.
pub fn ok(data: Value) -> Value {
    json!({ "code": 200, "status": "OK", "data": data })
}

pub fn error_body(code: u16, status: &str, error: &str, error_code: i32, message: &str) -> Value {
    json!({
        "code": code,
        "status": status,
        "error": error,
        "errorCode": error_code,
        "errorMessage": message
    })
}

/// Data of a successful login carrying a session ticket and an entity token.
pub fn login_data(needs_attribution: bool) -> Value {
    json!({
        "SessionTicket": SESSION_TICKET,
        "PlayFabId": PLAY_FAB_ID,
        "NewlyCreated": false,
        "LastLoginTime": "2024-05-01T12:00:00Z",
        "SettingsForUser": {
            "NeedsAttribution": needs_attribution,
            "GatherDeviceInfo": true,
            "GatherFocusInfo": true
        },
        "EntityToken": {
            "EntityToken": ENTITY_TOKEN,
            "TokenExpiration": "2030-01-01T00:00:00Z",
            "Entity": { "Id": ENTITY_ID, "Type": ENTITY_TYPE, "TypeString": ENTITY_TYPE }
        }
    })
}

/// An error hook counting its invocations.
pub fn counting_hook() -> (ErrorHook, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let hook: ErrorHook = Arc::new(move |_error: &Error| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    (hook, count)
}
