use super::*;

/// Tests the statistics endpoint over a populated directory.
///
/// Verifies the exact counts and that staff.total equals mods + assistants + admins.
///
/// Expected: 200 with consistent counts
#[tokio::test]
async fn stats_are_consistent() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    BotFactory::new(db)
        .token("token")
        .approved(true)
        .verified(true)
        .build()
        .await
        .unwrap();
    BotFactory::new(db).approved(true).build().await.unwrap();
    ServerFactory::new(db).build().await.unwrap();
    UserFactory::new(db).admin().build().await.unwrap();
    UserFactory::new(db).assistant().build().await.unwrap();
    UserFactory::new(db).moderator().verified(true).build().await.unwrap();
    UserFactory::new(db).tester(true).build().await.unwrap();
    let app = app(db);

    let response = send(&app, get("/v1/stats", Some("token"))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({
            "error": false,
            "status": 200,
            "stats": {
                "servers": { "total": 1 },
                "bots": { "total": 2, "approved": 2, "verified": 1 },
                "users": {
                    "total": 4,
                    "verified": 1,
                    "testers": 1,
                    "translators": 0,
                    "staff": { "total": 3, "mods": 1, "assistants": 1, "admins": 1 }
                }
            }
        })
    );

    let staff = &body["stats"]["users"]["staff"];
    assert_eq!(
        staff["total"].as_u64().unwrap(),
        staff["mods"].as_u64().unwrap()
            + staff["assistants"].as_u64().unwrap()
            + staff["admins"].as_u64().unwrap()
    );
}
