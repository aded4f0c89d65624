//! Admin API example: write and read back title data.
//!
//! Needs the title's developer secret key:
//! ```sh
//! PLAYFAB_TITLE_ID=ABCD PLAYFAB_DEVELOPER_SECRET_KEY=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example admin --features tracing
//! ```

use playfab_client_sdk::admin::Client;
use playfab_client_sdk::admin::types::request::{
    LookupUserAccountInfoRequest, SetTitleDataRequest,
};
use playfab_client_sdk::settings::ApiSettings;
use playfab_client_sdk::types::GetTitleDataRequest;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::new(ApiSettings::from_env())?;

    let request = SetTitleDataRequest::builder()
        .key("motd")
        .value("Hello from the admin example")
        .build();
    match client.set_title_data(&request).await {
        Ok(_) => info!(endpoint = "set_title_data", key = "motd"),
        Err(e) => debug!(endpoint = "set_title_data", error = %e),
    }

    let request = GetTitleDataRequest::builder()
        .keys(vec!["motd".to_owned()])
        .build();
    match client.get_title_data(&request).await {
        Ok(response) => info!(endpoint = "get_title_data", motd = ?response.data.get("motd")),
        Err(e) => debug!(endpoint = "get_title_data", error = %e),
    }

    if let Ok(play_fab_id) = std::env::var("PLAYFAB_PLAYER_ID") {
        let request = LookupUserAccountInfoRequest::builder()
            .play_fab_id(play_fab_id)
            .build();
        match client.get_user_account_info(&request).await {
            Ok(response) => info!(endpoint = "get_user_account_info", user = ?response.user_info),
            Err(e) => debug!(endpoint = "get_user_account_info", error = %e),
        }
    }

    Ok(())
}
