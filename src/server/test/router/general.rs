use super::*;

/// Tests the service description served at the root.
///
/// Expected: 200 with the crate version and both v1 revisions
#[tokio::test]
async fn root_describes_release_and_revisions() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let response = send(&app, get("/", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "release": env!("CARGO_PKG_VERSION"),
            "revisions": { "v1": { "v1-OLD": "discontinued", "v1-REVISED": "stable" } }
        })
    );
}

/// Tests the health check against a reachable database.
///
/// Expected: 200 with databaseOk true
#[tokio::test]
async fn health_reports_database() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let response = send(&app, get("/health", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "error": false, "status": 200, "databaseOk": true })
    );
}

/// Tests that the OpenAPI document lists every API route.
///
/// Expected: 200 with paths for each endpoint
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let response = send(&app, get("/openapi.json", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    for path in [
        "/",
        "/health",
        "/v1/stats",
        "/v1/user/{id}",
        "/v1/server/{id}",
        "/v1/bot/{id}",
        "/v1/bots",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {path}");
    }
}

/// Tests unmatched paths, inside and outside `/v1`.
///
/// Verifies that an unmatched `/v1` path is not gated, so no token is needed to
/// learn that it doesn't exist.
///
/// Expected: 404 Unknown Endpoint
#[tokio::test]
async fn unknown_paths_are_unknown_endpoints() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    for uri in ["/nope", "/v1", "/v1/widget/123", "/v2/bot/1"] {
        let response = send(&app, get(uri, None)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(
            json_body(response).await,
            json!({ "error": true, "status": 404, "message": "Unknown Endpoint" })
        );
    }
}

/// Tests an unsupported method on an existing route.
///
/// Expected: 404 Unknown Endpoint rather than 405, with or without a token
#[tokio::test]
async fn unsupported_method_is_unknown_endpoint() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    BotFactory::new(db).token("token").build().await.unwrap();
    let app = app(db);

    for token in [None, Some("token")] {
        let response = send(
            &app,
            request(Method::DELETE, "/v1/bot/1", token, Body::empty()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{token:?}");
        assert_eq!(
            json_body(response).await,
            json!({ "error": true, "status": 404, "message": "Unknown Endpoint" })
        );
    }
}

/// Tests that unsupported methods never spend the caller's quota.
///
/// An unverified token affords five requests per window; eight `DELETE`s must leave
/// all of it for the following read.
///
/// Expected: every DELETE is 404 and the GET afterwards is 200 with full quota
#[tokio::test]
async fn unsupported_method_is_not_charged() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let bot = BotFactory::new(db)
        .token("token")
        .verified(false)
        .build()
        .await
        .unwrap();
    let app = app(db);
    let uri = format!("/v1/bot/{}", bot.id);

    for _ in 0..8 {
        let response = send(
            &app,
            request(Method::DELETE, &uri, Some("token"), Body::empty()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let response = send(&app, get(&uri, Some("token"))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-ratelimit-remaining"],
        (API_POINTS - 15).to_string().as_str()
    );
}
