//! Bot domain models and parameters.
//!
//! Provides the bot listing model used by the read endpoints, the verification
//! counters used by stats, and the validated parameter for the server count update
//! posted by bot owners.

use serde_json::Value;

use crate::{
    model::{
        api::OwnerDto,
        bot::{BotDto, BotStatusDto},
    },
    server::error::AppError,
};

/// Message returned when the server count body is missing or invalid.
pub const GUILD_COUNT_REQUIRED_MESSAGE: &str = "guildCount (int) is Required";

/// Listed bot as stored in the directory.
///
/// Carries moderator-only data (notes, vote ledger, pending verification) which
/// `into_dto` strips. The API token never reaches this model; see `Account`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    pub id: String,
    pub name: String,
    pub prefix: String,
    pub library: String,
    pub tags: Value,
    pub vanity_url: String,
    pub server_count: i64,
    pub shard_count: i64,
    pub flags: i32,
    pub short_desc: String,
    pub long_desc: String,
    /// Internal moderator notes.
    pub mod_notes: String,
    pub editors: Value,
    pub owner_id: String,
    pub avatar: Value,
    /// Vote ledger.
    pub votes: Value,
    pub links: Value,
    pub social: Value,
    pub theme: Value,
    pub widgetbot: Value,
    pub status: BotStatus,
}

/// Listing flags of a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotStatus {
    pub approved: bool,
    pub premium: bool,
    pub site_bot: bool,
    pub archived: bool,
    pub verified: bool,
    /// Set while a verification request is under review.
    pub pending_verification: bool,
}

impl Bot {
    /// Converts the bot to its public projection.
    ///
    /// Drops moderator notes, votes and the pending verification flag.
    pub fn into_dto(self) -> BotDto {
        BotDto {
            id: self.id,
            name: self.name,
            prefix: self.prefix,
            library: self.library,
            tags: self.tags,
            vanity_url: self.vanity_url,
            server_count: self.server_count,
            shard_count: self.shard_count,
            flags: self.flags,
            short_desc: self.short_desc,
            long_desc: self.long_desc,
            editors: self.editors,
            owner: OwnerDto { id: self.owner_id },
            avatar: self.avatar,
            links: self.links,
            social: self.social,
            theme: self.theme,
            widgetbot: self.widgetbot,
            status: BotStatusDto {
                approved: self.status.approved,
                premium: self.status.premium,
                site_bot: self.status.site_bot,
                archived: self.status.archived,
                verified: self.status.verified,
            },
        }
    }

    /// Converts an entity model to a bot domain model at the repository boundary.
    ///
    /// The token column is discarded here.
    pub fn from_entity(entity: entity::bot::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            prefix: entity.prefix,
            library: entity.library,
            tags: entity.tags,
            vanity_url: entity.vanity_url,
            server_count: entity.server_count,
            shard_count: entity.shard_count,
            flags: entity.flags,
            short_desc: entity.short_desc,
            long_desc: entity.long_desc,
            mod_notes: entity.mod_notes,
            editors: entity.editors,
            owner_id: entity.owner_id,
            avatar: entity.avatar,
            votes: entity.votes,
            links: entity.links,
            social: entity.social,
            theme: entity.theme,
            widgetbot: entity.widgetbot,
            status: BotStatus {
                approved: entity.approved,
                premium: entity.premium,
                site_bot: entity.site_bot,
                archived: entity.archived,
                verified: entity.verified,
                pending_verification: entity.pending_verification,
            },
        }
    }
}

/// Per-bot flags needed to compute directory statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotStatusFlags {
    pub approved: bool,
    pub verified: bool,
}

/// Parameters for updating a bot's public server count.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateServerCountParam {
    /// ID of the bot being updated.
    pub bot_id: String,
    /// New server count, never negative.
    pub server_count: i64,
}

impl UpdateServerCountParam {
    /// Validates a raw request body into update parameters.
    ///
    /// The body must be a JSON object whose `guildCount` is a non-negative whole
    /// number, or a string holding one. Whole floats such as `42.0` or `1e3` count.
    ///
    /// # Arguments
    /// - `bot_id` - ID of the bot being updated
    /// - `body` - Raw request body bytes
    ///
    /// # Returns
    /// - `Ok(UpdateServerCountParam)` - Valid count
    /// - `Err(AppError::BadRequest)` - Unparseable body, or `guildCount` missing, null,
    ///   negative, fractional, non-numeric or out of range
    pub fn from_body(bot_id: String, body: &[u8]) -> Result<Self, AppError> {
        let invalid = || AppError::BadRequest(GUILD_COUNT_REQUIRED_MESSAGE.to_string());

        let value: Value = serde_json::from_slice(body).map_err(|_| invalid())?;

        let count = match value.get("guildCount") {
            Some(Value::Number(number)) => number
                .as_u64()
                .or_else(|| number.as_f64().and_then(whole_count)),
            Some(Value::String(text)) => {
                let text = text.trim();
                text.parse::<u64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(whole_count))
            }
            _ => None,
        }
        .and_then(|count| i64::try_from(count).ok())
        .ok_or_else(invalid)?;

        Ok(Self {
            bot_id,
            server_count: count,
        })
    }
}

/// Accepts a finite, non-negative float with no fractional part that fits in `i64`.
fn whole_count(value: f64) -> Option<u64> {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value < I64_BOUND {
        Some(value as u64)
    } else {
        None
    }
}
