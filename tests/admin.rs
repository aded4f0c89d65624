#![cfg(feature = "admin")]
#![allow(clippy::unwrap_used, reason = "tests can panic on unwrap")]

mod common;

mod title_data {
    use httpmock::{Method::POST, MockServer};
    use playfab_client_sdk::admin::Client;
    use playfab_client_sdk::admin::endpoints::SET_TITLE_DATA;
    use playfab_client_sdk::admin::types::request::SetTitleDataRequest;
    use playfab_client_sdk::api::CallOptions;
    use playfab_client_sdk::error::Kind;
    use playfab_client_sdk::settings::SDK_VERSION;
    use playfab_client_sdk::types::{EmptyResponse, GetTitleDataRequest};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{
        SECRET_KEY, X_PLAYFAB_SDK, X_SECRET_KEY, ok, settings, settings_with_secret_key,
    };

    #[tokio::test]
    async fn set_title_data_should_send_secret_key() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(settings_with_secret_key(&server))?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/Admin/SetTitleData")
                .query_param("sdk", SDK_VERSION)
                .header(X_SECRET_KEY, SECRET_KEY)
                .header(X_PLAYFAB_SDK, SDK_VERSION)
                .header("Content-Type", "application/json")
                .json_body(json!({ "Key": "motd", "Value": "Season 3 is live" }));
            then.status(StatusCode::OK).json_body(ok(json!({})));
        });

        let request = SetTitleDataRequest::builder()
            .key("motd")
            .value("Season 3 is live")
            .build();
        client.set_title_data(&request).await?;

        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn set_title_data_with_options_should_return_custom_data() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(settings_with_secret_key(&server))?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/Admin/SetTitleData")
                .header(X_SECRET_KEY, SECRET_KEY)
                .json_body(json!({ "Key": "motd", "Value": "Patch day" }));
            then.status(StatusCode::OK).json_body(ok(json!({})));
        });

        let request = SetTitleDataRequest::builder()
            .key("motd")
            .value("Patch day")
            .build();
        let response = client
            .api()
            .call_with::<_, EmptyResponse, _>(
                SET_TITLE_DATA,
                &request,
                CallOptions::with_custom_data(vec!["motd"]),
            )
            .await;

        assert_eq!(response.custom_data, vec!["motd"]);
        assert_eq!(response.result?, EmptyResponse::default());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn set_title_internal_data_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(settings_with_secret_key(&server))?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/Admin/SetTitleInternalData")
                .header(X_SECRET_KEY, SECRET_KEY)
                .json_body(json!({ "Key": "payout_rate" }));
            then.status(StatusCode::OK).json_body(ok(json!({})));
        });

        // No value removes the key
        let request = SetTitleDataRequest::builder().key("payout_rate").build();
        client.set_title_internal_data(&request).await?;

        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn get_title_internal_data_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(settings_with_secret_key(&server))?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/Admin/GetTitleInternalData")
                .header(X_SECRET_KEY, SECRET_KEY)
                .json_body(json!({ "Keys": ["payout_rate"] }));
            then.status(StatusCode::OK)
                .json_body(ok(json!({ "Data": { "payout_rate": "0.97" } })));
        });

        let request = GetTitleDataRequest::builder()
            .keys(vec!["payout_rate".to_owned()])
            .build();
        let response = client.get_title_internal_data(&request).await?;

        assert_eq!(
            response.data.get("payout_rate").map(String::as_str),
            Some("0.97")
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn missing_secret_key_should_fail_before_request() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(settings(&server))?;

        let mock = server.mock(|when, then| {
            when.method(POST).path("/Admin/GetTitleData");
            then.status(StatusCode::OK).json_body(ok(json!({ "Data": {} })));
        });

        let err = client
            .get_title_data(&GetTitleDataRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Authentication);
        assert!(
            err.to_string()
                .contains("Must have DeveloperSecretKey set to call this method"),
            "unexpected message: {err}"
        );
        mock.assert_calls(0);

        Ok(())
    }

    #[tokio::test]
    async fn empty_data_member_should_decode_as_empty() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(settings_with_secret_key(&server))?;

        let mock = server.mock(|when, then| {
            when.method(POST).path("/Admin/GetTitleData");
            then.status(StatusCode::OK)
                .json_body(json!({ "code": 200, "status": "OK" }));
        });

        let response = client
            .get_title_data(&GetTitleDataRequest::default())
            .await?;

        assert!(response.data.is_empty());
        mock.assert();

        Ok(())
    }
}

mod players {
    use std::sync::atomic::Ordering;

    use httpmock::{Method::POST, MockServer};
    use playfab_client_sdk::admin::Client;
    use playfab_client_sdk::admin::types::request::{
        BanRequest, BanUsersRequest, DeletePlayerRequest, LookupUserAccountInfoRequest,
        RevokeAllBansForUserRequest,
    };
    use playfab_client_sdk::api::Config;
    use playfab_client_sdk::error::Kind;
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common::{
        PLAY_FAB_ID, SECRET_KEY, X_SECRET_KEY, counting_hook, error_body, ok,
        settings_with_secret_key,
    };

    #[tokio::test]
    async fn get_user_account_info_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(settings_with_secret_key(&server))?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/Admin/GetUserAccountInfo")
                .json_body(json!({ "Username": "player_one" }));
            then.status(StatusCode::OK).json_body(ok(json!({
                "UserInfo": {
                    "PlayFabId": PLAY_FAB_ID,
                    "Username": "player_one",
                    "PrivateInfo": { "Email": "one@example.com" }
                }
            })));
        });

        let request = LookupUserAccountInfoRequest::builder()
            .username("player_one")
            .build();
        let response = client.get_user_account_info(&request).await?;

        let info = response.user_info.unwrap();
        assert_eq!(info.play_fab_id.as_deref(), Some(PLAY_FAB_ID));
        assert_eq!(
            info.private_info.and_then(|private| private.email),
            Some("one@example.com".to_owned())
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn ban_and_revoke_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(settings_with_secret_key(&server))?;

        let ban = server.mock(|when, then| {
            when.method(POST)
                .path("/Admin/BanUsers")
                .header(X_SECRET_KEY, SECRET_KEY)
                .json_body(json!({
                    "Bans": [{
                        "PlayFabId": PLAY_FAB_ID,
                        "DurationInHours": 72,
                        "Reason": "cheating"
                    }]
                }));
            then.status(StatusCode::OK).json_body(ok(json!({
                "BanData": [{
                    "Active": true,
                    "BanId": "ban-1",
                    "Created": "2024-05-01T12:00:00Z",
                    "Expires": "2024-05-04T12:00:00Z",
                    "PlayFabId": PLAY_FAB_ID,
                    "Reason": "cheating"
                }]
            })));
        });
        let revoke = server.mock(|when, then| {
            when.method(POST)
                .path("/Admin/RevokeAllBansForUser")
                .json_body(json!({ "PlayFabId": PLAY_FAB_ID }));
            then.status(StatusCode::OK).json_body(ok(json!({
                "BanData": [{ "Active": false, "BanId": "ban-1", "PlayFabId": PLAY_FAB_ID }]
            })));
        });

        let request = BanUsersRequest::builder()
            .bans(vec![
                BanRequest::builder()
                    .play_fab_id(PLAY_FAB_ID)
                    .duration_in_hours(72)
                    .reason("cheating")
                    .build(),
            ])
            .build();
        let banned = client.ban_users(&request).await?;

        assert_eq!(banned.ban_data.len(), 1);
        assert!(banned.ban_data[0].active);
        assert!(banned.ban_data[0].expires.is_some());

        let request = RevokeAllBansForUserRequest::builder()
            .play_fab_id(PLAY_FAB_ID)
            .build();
        let revoked = client.revoke_all_bans_for_user(&request).await?;

        assert!(!revoked.ban_data[0].active);
        ban.assert();
        revoke.assert();

        Ok(())
    }

    #[tokio::test]
    async fn delete_player_failure_should_call_error_hook() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (hook, errors) = counting_hook();
        let client = Client::with_config(
            Config::builder()
                .settings(settings_with_secret_key(&server))
                .error_hook(hook)
                .build(),
        )?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/Admin/DeletePlayer")
                .json_body(json!({ "PlayFabId": "missing" }));
            then.status(StatusCode::BAD_REQUEST).json_body(error_body(
                400,
                "BadRequest",
                "AccountNotFound",
                1001,
                "User not found",
            ));
        });

        let request = DeletePlayerRequest::builder().play_fab_id("missing").build();
        let err = client.delete_player(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Api);
        assert_eq!(err.api_error().unwrap().error, "AccountNotFound");
        assert_eq!(errors.load(Ordering::SeqCst), 1);
        mock.assert();

        Ok(())
    }
}
