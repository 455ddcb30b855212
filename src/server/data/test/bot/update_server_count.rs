use super::*;

/// Tests updating a bot's server count.
///
/// Verifies that the new value is persisted and other bots are untouched.
///
/// Expected: Ok(true) and the stored count equals the new value
#[tokio::test]
async fn persists_new_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Bot).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BotFactory::new(db).id("111").server_count(10).build().await?;
    BotFactory::new(db).id("222").server_count(20).build().await?;

    let repo = BotRepository::new(db);
    let updated = repo
        .update_server_count(UpdateServerCountParam {
            bot_id: "111".to_string(),
            server_count: 1200,
        })
        .await?;

    assert!(updated);
    assert_eq!(repo.find_by_id("111").await?.unwrap().server_count, 1200);
    assert_eq!(repo.find_by_id("222").await?.unwrap().server_count, 20);

    Ok(())
}

/// Tests updating a bot that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_bot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Bot).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);
    let updated = repo
        .update_server_count(UpdateServerCountParam {
            bot_id: "404".to_string(),
            server_count: 5,
        })
        .await?;

    assert!(!updated);

    Ok(())
}
