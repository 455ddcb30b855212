use super::*;

async fn server_count(app: &Router, id: &str, token: &str) -> i64 {
    let response = send(app, get(&format!("/v1/bot/{id}"), Some(token))).await;
    json_body(response).await["bot"]["serverCount"]
        .as_i64()
        .unwrap()
}

/// Tests a bot posting its own server count.
///
/// Expected: 200 Updated, and the new count is visible on the next read
#[tokio::test]
async fn owner_updates_server_count() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db)
        .id("111")
        .token("token")
        .verified(true)
        .server_count(3)
        .build()
        .await
        .unwrap();
    let app = app(db);

    for (body, expected) in [
        (r#"{"guildCount": 1200}"#, 1200),
        (r#"{"guildCount": "1300"}"#, 1300),
        (r#"{"guildCount": 1.4e3}"#, 1400),
        (r#"{"guildCount": 0}"#, 0),
    ] {
        let response = send(&app, post("/v1/bot/111", Some("token"), body)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "error": false, "message": "Updated", "status": 200 })
        );
        assert_eq!(server_count(&app, "111", "token").await, expected);
    }
}

/// Tests invalid server count bodies.
///
/// Expected: 400 guildCount (int) is Required, and the stored count unchanged
#[tokio::test]
async fn rejects_invalid_guild_count() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db)
        .id("111")
        .token("token")
        .verified(true)
        .server_count(3)
        .build()
        .await
        .unwrap();
    let app = app(db);

    for body in [
        "",
        "{}",
        r#"{"guildCount": null}"#,
        r#"{"guildCount": "many"}"#,
        r#"{"guildCount": -5}"#,
        r#"{"guildCount": 2.5}"#,
    ] {
        let response = send(&app, post("/v1/bot/111", Some("token"), body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(
            json_body(response).await,
            json!({ "error": true, "message": "guildCount (int) is Required", "status": 400 })
        );
    }

    assert_eq!(server_count(&app, "111", "token").await, 3);
}

/// Tests that a token cannot update a different bot.
///
/// Expected: 403 and the target bot unchanged
#[tokio::test]
async fn rejects_other_bots_token() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db)
        .id("111")
        .token("mine")
        .verified(true)
        .build()
        .await
        .unwrap();
    BotFactory::new(db)
        .id("222")
        .token("theirs")
        .verified(true)
        .server_count(9)
        .build()
        .await
        .unwrap();
    let app = app(db);

    let response = send(&app, post("/v1/bot/222", Some("mine"), r#"{"guildCount": 1}"#)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await,
        json!({ "error": true, "status": 403, "message": "Invalid \"Authorization\" Header" })
    );
    assert_eq!(server_count(&app, "222", "theirs").await, 9);
}

/// Tests updating a bot that does not exist from a write-bypassed address.
///
/// Expected: 404 Unknown Bot, even with an invalid body
#[tokio::test]
async fn unknown_bot_update_is_not_found() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let app = app_with_access(
        test.db.as_ref().unwrap(),
        AccessPolicy::new([], ["127.0.0.1".parse::<IpAddr>().unwrap()], false),
    );

    for body in [r#"{"guildCount": 10}"#, "not json"] {
        let response = send(
            &app,
            from_peer(post("/v1/bot/404", None, body), [127, 0, 0, 1]),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({ "error": true, "message": "Unknown Bot", "status": 404 })
        );
    }
}

/// Tests that a write-bypassed address may update any bot without a token.
///
/// Expected: 200 Updated
#[tokio::test]
async fn write_bypass_updates_any_bot() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db)
        .id("111")
        .token("token")
        .verified(true)
        .build()
        .await
        .unwrap();
    let app = app_with_access(
        db,
        AccessPolicy::new([], ["127.0.0.1".parse::<IpAddr>().unwrap()], false),
    );

    let response = send(
        &app,
        from_peer(post("/v1/bot/111", None, r#"{"guildCount": 42}"#), [127, 0, 0, 1]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(server_count(&app, "111", "token").await, 42);
}
