use super::*;
use crate::server::{model::account::Account, service::rate_limit::QuotaSnapshot};
use std::time::Duration;

fn authenticated(bot_id: &str) -> Admission {
    Admission::Authenticated {
        account: Account {
            bot_id: bot_id.to_string(),
            token: "token".to_string(),
            verified: false,
        },
        quota: QuotaSnapshot {
            limit: API_POINTS,
            remaining: 60,
            reset_after: Duration::from_secs(1),
        },
    }
}

/// Tests that a bot's own token may modify it.
///
/// Expected: Ok(())
#[test]
fn allows_owner() {
    assert!(authenticated("111").require_owner("111").is_ok());
}

/// Tests that a token cannot modify another bot.
///
/// Expected: Err(AuthError::NotOwner) naming both bots
#[test]
fn rejects_other_bot() {
    let result = authenticated("111").require_owner("222");

    assert_eq!(
        result,
        Err(AuthError::NotOwner {
            account_bot_id: "111".to_string(),
            target_bot_id: "222".to_string(),
        })
    );
}

/// Tests that bypassed callers may modify any bot.
///
/// Expected: Ok(())
#[test]
fn allows_bypassed_caller() {
    assert!(Admission::Bypassed.require_owner("222").is_ok());
}
