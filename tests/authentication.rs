#![cfg(all(feature = "authentication", feature = "client"))]
#![allow(clippy::unwrap_used, reason = "tests can panic on unwrap")]

mod common;

use httpmock::{Method::POST, MockServer};
use playfab_client_sdk::api::Config;
use playfab_client_sdk::auth::{AuthenticationContext, ExposeSecret as _};
use playfab_client_sdk::authentication::Client;
use playfab_client_sdk::authentication::types::request::{
    GetEntityTokenRequest, ValidateEntityTokenRequest,
};
use playfab_client_sdk::client;
use playfab_client_sdk::client::types::request::LoginWithCustomIdRequest;
use playfab_client_sdk::error::Kind;
use playfab_client_sdk::types::EntityKey;
use reqwest::StatusCode;
use serde_json::json;

use crate::common::{
    ENTITY_ID, ENTITY_TOKEN, ENTITY_TYPE, SECRET_KEY, SESSION_TICKET, TITLE_ID, X_AUTHORIZATION,
    X_ENTITY_TOKEN, X_SECRET_KEY, logged_in_context, login_data, ok, settings,
    settings_with_secret_key,
};

fn title_token_data() -> serde_json::Value {
    json!({
        "EntityToken": "title-entity-token",
        "TokenExpiration": "2030-01-01T00:00:00Z",
        "Entity": { "Id": TITLE_ID, "Type": "title", "TypeString": "title" }
    })
}

#[tokio::test]
async fn get_entity_token_with_secret_key_should_store_token() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(settings_with_secret_key(&server))?;

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/Authentication/GetEntityToken")
            .header(X_SECRET_KEY, SECRET_KEY)
            .json_body(json!({}));
        then.status(StatusCode::OK).json_body(ok(title_token_data()));
    });

    let response = client
        .get_entity_token(&GetEntityTokenRequest::default())
        .await?;

    assert_eq!(response.entity_token.as_deref(), Some("title-entity-token"));
    assert!(response.token_expiration.is_some());

    let context = client.api().authentication_context();
    assert!(context.is_entity_logged_in());
    assert!(!context.is_client_logged_in());
    assert_eq!(
        context.entity_token().map(|token| token.expose_secret()),
        Some("title-entity-token")
    );
    assert_eq!(context.entity_id(), Some(TITLE_ID));
    assert_eq!(context.entity_type(), Some("title"));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn get_entity_token_should_prefer_session_ticket_over_secret_key() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::with_config(
        Config::builder()
            .settings(settings_with_secret_key(&server))
            .authentication_context(logged_in_context())
            .build(),
    )?;

    let with_key = server.mock(|when, then| {
        when.method(POST)
            .path("/Authentication/GetEntityToken")
            .header_exists(X_SECRET_KEY);
        then.status(StatusCode::OK).json_body(ok(title_token_data()));
    });
    let with_ticket = server.mock(|when, then| {
        when.method(POST)
            .path("/Authentication/GetEntityToken")
            .header(X_AUTHORIZATION, SESSION_TICKET)
            .json_body(json!({ "Entity": { "Id": ENTITY_ID, "Type": ENTITY_TYPE } }));
        then.status(StatusCode::OK).json_body(ok(json!({
            "EntityToken": ENTITY_TOKEN,
            "Entity": { "Id": ENTITY_ID, "Type": ENTITY_TYPE }
        })));
    });

    let request = GetEntityTokenRequest::builder()
        .entity(EntityKey::builder().id(ENTITY_ID).kind(ENTITY_TYPE).build())
        .build();
    client.get_entity_token(&request).await?;

    let context = client.api().authentication_context();
    assert!(context.is_client_logged_in(), "session ticket must be kept");
    assert!(context.is_entity_logged_in());
    assert_eq!(context.entity_id(), Some(ENTITY_ID));
    with_key.assert_calls(0);
    with_ticket.assert();

    Ok(())
}

#[tokio::test]
async fn get_entity_token_without_credentials_should_fail() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(settings(&server))?;

    let mock = server.mock(|when, then| {
        when.method(POST).path("/Authentication/GetEntityToken");
        then.status(StatusCode::OK).json_body(ok(title_token_data()));
    });

    let err = client
        .get_entity_token(&GetEntityTokenRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Kind::Authentication);
    assert!(
        err.to_string()
            .contains("Must call Client Login or GetEntityToken before calling this method"),
        "unexpected message: {err}"
    );
    assert!(!client.api().is_entity_logged_in());
    mock.assert_calls(0);

    Ok(())
}

#[tokio::test]
async fn login_on_client_surface_should_authorise_shared_client() -> anyhow::Result<()> {
    let server = MockServer::start();
    let players = client::Client::new(settings(&server))?;
    let entities = Client::from_api(players.api().clone());

    let login = server.mock(|when, then| {
        when.method(POST).path("/Client/LoginWithCustomID");
        then.status(StatusCode::OK).json_body(ok(login_data(false)));
    });
    let validate = server.mock(|when, then| {
        when.method(POST)
            .path("/Authentication/ValidateEntityToken")
            .header(X_ENTITY_TOKEN, ENTITY_TOKEN)
            .json_body(json!({ "EntityToken": "someone-elses-token" }));
        then.status(StatusCode::OK).json_body(ok(json!({
            "Entity": { "Id": "F00D", "Type": ENTITY_TYPE },
            "IdentityProvider": "CustomId",
            "EntityLineage": {
                "MasterPlayerAccountId": "BEEF",
                "TitleId": TITLE_ID,
                "TitlePlayerAccountId": "F00D"
            }
        })));
    });

    players
        .login_with_custom_id(&LoginWithCustomIdRequest::builder().custom_id("player-1").build())
        .await?;

    let request = ValidateEntityTokenRequest::builder()
        .entity_token("someone-elses-token")
        .build();
    let response = entities.validate_entity_token(&request).await?;

    assert_eq!(response.identity_provider.as_deref(), Some("CustomId"));
    assert_eq!(response.entity.map(|entity| entity.id), Some("F00D".to_owned()));
    assert_eq!(
        response
            .entity_lineage
            .and_then(|lineage| lineage.master_player_account_id),
        Some("BEEF".to_owned())
    );
    login.assert();
    validate.assert();

    Ok(())
}

#[tokio::test]
async fn validate_entity_token_should_require_entity_token() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::with_config(
        Config::builder()
            .settings(settings_with_secret_key(&server))
            .authentication_context(
                AuthenticationContext::builder()
                    .session_ticket(SESSION_TICKET)
                    .build(),
            )
            .build(),
    )?;

    let mock = server.mock(|when, then| {
        when.method(POST).path("/Authentication/ValidateEntityToken");
        then.status(StatusCode::OK).json_body(ok(json!({})));
    });

    let request = ValidateEntityTokenRequest::builder()
        .entity_token("someone-elses-token")
        .build();
    let err = client.validate_entity_token(&request).await.unwrap_err();

    assert_eq!(err.kind(), Kind::Authentication);
    assert!(
        err.to_string()
            .contains("Must call GetEntityToken before calling this method"),
        "unexpected message: {err}"
    );
    mock.assert_calls(0);

    Ok(())
}
