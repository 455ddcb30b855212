use super::*;

/// Tests that gated routes require a token.
///
/// Expected: 401 Unauthorised for a missing or empty header
#[tokio::test]
async fn rejects_missing_token() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let app = app(test.db.as_ref().unwrap());

    for token in [None, Some("")] {
        let response = send(&app, get("/v1/stats", token)).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await,
            json!({ "error": true, "status": 401, "message": "Unauthorised" })
        );
    }
}

/// Tests that unknown tokens are rejected on every gated route.
///
/// Expected: 403 Invalid "Authorization" Header
#[tokio::test]
async fn rejects_unknown_token() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db).id("111").token("real").build().await.unwrap();
    let app = app(db);

    for request in [
        get("/v1/stats", Some("fake")),
        get("/v1/bot/111", Some("fake")),
        get("/v1/bots", Some("REAL")),
        post("/v1/bot/111", Some("fake"), r#"{"guildCount": 1}"#),
    ] {
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            json_body(response).await,
            json!({ "error": true, "status": 403, "message": "Invalid \"Authorization\" Header" })
        );
    }
}

/// Tests the request budget of a verified bot.
///
/// Verifies that 15 requests are admitted with decreasing remaining quota, and the
/// 16th is rejected with a retry delay in the body and the `Retry-After` header.
///
/// Expected: 15 x 200, then 429 with retry 10
#[tokio::test]
async fn verified_token_gets_fifteen_requests() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db)
        .token("verified")
        .verified(true)
        .build()
        .await
        .unwrap();
    let app = app(db);

    for i in 1..=15u32 {
        let response = send(&app, get("/v1/stats", Some("verified"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["x-ratelimit-limit"], "75");
        assert_eq!(
            headers["x-ratelimit-remaining"],
            (API_POINTS - i * 5).to_string().as_str()
        );
        assert!(headers.contains_key("x-ratelimit-reset"));
    }

    let response = send(&app, get("/v1/stats", Some("verified"))).await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()["retry-after"], "10");
    assert_eq!(
        json_body(response).await,
        json!({ "error": true, "status": 429, "message": "Too Many Requests", "retry": 10 })
    );
}

/// Tests the request budget of an unverified bot.
///
/// Expected: 5 x 200, then 429 on every further request
#[tokio::test]
async fn unverified_token_gets_five_requests() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db).token("unverified").build().await.unwrap();
    let app = app(db);

    for _ in 0..5 {
        let response = send(&app, get("/v1/bots", Some("unverified"))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    for _ in 0..3 {
        let response = send(&app, get("/v1/bots", Some("unverified"))).await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = json_body(response).await;
        assert!(body["retry"].as_u64().unwrap() >= 1);
    }
}

/// Tests that quota is tracked per token.
///
/// Expected: a second bot's token is admitted after the first is blocked
#[tokio::test]
async fn quota_is_per_token() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db).token("first").build().await.unwrap();
    BotFactory::new(db).token("second").build().await.unwrap();
    let app = app(db);

    for _ in 0..6 {
        send(&app, get("/v1/stats", Some("first"))).await;
    }
    let blocked = send(&app, get("/v1/stats", Some("first"))).await;
    let other = send(&app, get("/v1/stats", Some("second"))).await;

    assert_eq!(blocked.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(other.status(), StatusCode::OK);
}

/// Tests that an allow-listed peer is admitted without a token or quota.
///
/// Expected: 200 for every request, without rate limit headers
#[tokio::test]
async fn bypassed_peer_is_always_admitted() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let app = app_with_access(
        test.db.as_ref().unwrap(),
        AccessPolicy::new(["10.0.0.1".parse::<IpAddr>().unwrap()], [], false),
    );

    for _ in 0..30 {
        let response = send(&app, from_peer(get("/v1/stats", None), [10, 0, 0, 1])).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response.headers().contains_key("x-ratelimit-remaining"));
    }

    let response = send(&app, from_peer(get("/v1/stats", None), [10, 0, 0, 2])).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that forwarding headers only count when proxies are trusted.
///
/// Expected: 401 when untrusted, 200 when trusted
#[tokio::test]
async fn forwarded_address_requires_trusted_proxy() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bypass = || ["10.0.0.1".parse::<IpAddr>().unwrap()];

    let forwarded = || {
        let mut request = from_peer(get("/v1/stats", None), [192, 0, 2, 1]);
        request
            .headers_mut()
            .insert("x-forwarded-for", "10.0.0.1, 192.0.2.1".parse().unwrap());
        request
    };

    let untrusted = app_with_access(db, AccessPolicy::new(bypass(), [], false));
    let response = send(&untrusted, forwarded()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let trusted = app_with_access(db, AccessPolicy::new(bypass(), [], true));
    let response = send(&trusted, forwarded()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests that a store failure during token lookup is a 500, not an admission.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn store_failure_is_internal_error() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let response = send(&app, get("/v1/stats", Some("token"))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": true, "status": 500, "message": "Internal Server Error" })
    );
}
