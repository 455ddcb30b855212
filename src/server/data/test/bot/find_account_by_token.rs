use super::*;

/// Tests resolving a token to the owning bot's account.
///
/// Expected: Ok(Some(Account)) carrying the bot ID and verification flag
#[tokio::test]
async fn resolves_known_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Bot).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BotFactory::new(db)
        .id("111")
        .token("token-111")
        .verified(true)
        .build()
        .await?;
    BotFactory::new(db).id("222").token("token-222").build().await?;

    let repo = BotRepository::new(db);
    let account = repo.find_account_by_token("token-111").await?.unwrap();

    assert_eq!(account.bot_id, "111");
    assert_eq!(account.token, "token-111");
    assert!(account.verified);

    let account = repo.find_account_by_token("token-222").await?.unwrap();
    assert_eq!(account.bot_id, "222");
    assert!(!account.verified);

    Ok(())
}

/// Tests that only exact token matches resolve.
///
/// Verifies that prefixes, different casing and surrounding whitespace are not
/// treated as the stored token.
///
/// Expected: Ok(None) for every near miss
#[tokio::test]
async fn rejects_near_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Bot).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BotFactory::new(db).token("DELAPI_secret").build().await?;

    let repo = BotRepository::new(db);

    for candidate in ["DELAPI_", "delapi_secret", " DELAPI_secret", "DELAPI_secret2", ""] {
        assert!(
            repo.find_account_by_token(candidate).await?.is_none(),
            "{candidate:?} should not resolve"
        );
    }

    Ok(())
}
