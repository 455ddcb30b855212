//! API account resolved from a bearer token.

use crate::server::service::rate_limit::{UNVERIFIED_COST, VERIFIED_COST};

/// Credential record backing an API token.
///
/// Every listed bot owns exactly one token; the account is the bot document seen
/// through the authorization gate, so only the fields the gate reads are carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// ID of the bot owning the token.
    pub bot_id: String,
    /// Stored token, compared byte for byte against the presented one.
    pub token: String,
    /// Whether the owning bot is verified.
    pub verified: bool,
}

impl Account {
    /// Rate limit points charged for each request made with this account.
    ///
    /// # Returns
    /// - `5` - Verified bots
    /// - `15` - Unverified bots
    pub fn cost(&self) -> u32 {
        if self.verified {
            VERIFIED_COST
        } else {
            UNVERIFIED_COST
        }
    }

    /// Whether this account is allowed to modify the given bot.
    pub fn owns_bot(&self, bot_id: &str) -> bool {
        self.bot_id == bot_id
    }

    pub fn from_entity(entity: entity::bot::Model) -> Self {
        Self {
            bot_id: entity.id,
            token: entity.token,
            verified: entity.verified,
        }
    }
}
