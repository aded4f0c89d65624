//! Client API example: log in with a custom id, read title data, then get an entity token on a
//! client sharing the session.
//!
//! Run with tracing enabled:
//! ```sh
//! PLAYFAB_TITLE_ID=ABCD RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example login --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=login.log PLAYFAB_TITLE_ID=ABCD RUST_LOG=debug cargo run --example login --features tracing
//! ```

use std::fs::File;
use std::sync::Arc;

use playfab_client_sdk::api::{Config, ErrorHook};
use playfab_client_sdk::authentication;
use playfab_client_sdk::authentication::types::request::GetEntityTokenRequest;
use playfab_client_sdk::client::Client;
use playfab_client_sdk::client::types::request::{GetUserDataRequest, LoginWithCustomIdRequest};
use playfab_client_sdk::error::Error;
use playfab_client_sdk::settings::ApiSettings;
use playfab_client_sdk::types::GetTitleDataRequest;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let error_hook: ErrorHook = Arc::new(|error: &Error| {
        if let Some(api_error) = error.api_error() {
            warn!(report = %api_error.generate_error_report(), "PlayFab call failed");
        }
    });

    let custom_id = std::env::var("PLAYFAB_CUSTOM_ID").unwrap_or_else(|_| "demo-player".to_owned());
    let client = Client::with_config(
        Config::builder()
            .settings(ApiSettings::from_env())
            .error_hook(error_hook)
            .build(),
    )?;

    let request = LoginWithCustomIdRequest::builder()
        .custom_id(custom_id)
        .create_account(true)
        .build();
    let login = client.login_with_custom_id(&request).await?;
    info!(
        endpoint = "login_with_custom_id",
        play_fab_id = ?login.play_fab_id,
        newly_created = login.newly_created
    );

    match client.get_title_data(&GetTitleDataRequest::default()).await {
        Ok(response) => {
            for (key, value) in &response.data {
                info!(endpoint = "get_title_data", key = %key, value = %value);
            }
        }
        Err(e) => debug!(endpoint = "get_title_data", error = %e),
    }

    match client.get_user_data(&GetUserDataRequest::default()).await {
        Ok(response) => info!(
            endpoint = "get_user_data",
            keys = response.data.len(),
            data_version = response.data_version
        ),
        Err(e) => debug!(endpoint = "get_user_data", error = %e),
    }

    let entities = authentication::Client::from_api(client.api().clone());
    match entities
        .get_entity_token(&GetEntityTokenRequest::default())
        .await
    {
        Ok(response) => info!(
            endpoint = "get_entity_token",
            entity = ?response.entity,
            expires = ?response.token_expiration
        ),
        Err(e) => debug!(endpoint = "get_entity_token", error = %e),
    }

    client.forget_all_credentials();
    info!(logged_in = client.is_client_logged_in(), "forgot credentials");

    Ok(())
}
