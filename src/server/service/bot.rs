//! Bot service for business logic.
//!
//! This module provides the `BotService` for reading bot listings and applying the
//! server count updates bots post to the API.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::bot::BotRepository,
    error::AppError,
    model::bot::{Bot, UpdateServerCountParam},
};

pub const UNKNOWN_BOT_MESSAGE: &str = "Unknown Bot";

/// Service providing business logic for bot listings.
pub struct BotService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BotService<'a> {
    /// Creates a new BotService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BotService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a bot by ID.
    ///
    /// # Arguments
    /// - `id` - Bot ID from the request path
    ///
    /// # Returns
    /// - `Ok(Bot)` - Bot found
    /// - `Err(AppError::NotFound)` - No bot with that ID (`Unknown Bot`)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_bot(&self, id: &str) -> Result<Bot, AppError> {
        let bot_repo = BotRepository::new(self.db);

        bot_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(UNKNOWN_BOT_MESSAGE.to_string()))
    }

    /// Retrieves every listed bot.
    pub async fn get_all_bots(&self) -> Result<Vec<Bot>, AppError> {
        let bot_repo = BotRepository::new(self.db);
        let bots = bot_repo.get_all().await?;
        Ok(bots)
    }

    /// Updates a bot's server count from a raw request body.
    ///
    /// The bot's existence is checked before the body is validated, so a request for
    /// an unknown bot is reported as such regardless of its body. The write is a single
    /// field update.
    ///
    /// # Arguments
    /// - `bot_id` - Bot ID from the request path
    /// - `body` - Raw request body bytes
    ///
    /// # Returns
    /// - `Ok(())` - Count updated
    /// - `Err(AppError::NotFound)` - No bot with that ID (`Unknown Bot`)
    /// - `Err(AppError::BadRequest)` - Body has no valid `guildCount`
    /// - `Err(AppError::DbErr)` - Database error during lookup or update
    pub async fn update_server_count(&self, bot_id: &str, body: &[u8]) -> Result<(), AppError> {
        let bot_repo = BotRepository::new(self.db);

        if bot_repo.find_by_id(bot_id).await?.is_none() {
            return Err(AppError::NotFound(UNKNOWN_BOT_MESSAGE.to_string()));
        }

        let param = UpdateServerCountParam::from_body(bot_id.to_string(), body)?;

        if !bot_repo.update_server_count(param).await? {
            return Err(AppError::NotFound(UNKNOWN_BOT_MESSAGE.to_string()));
        }

        tracing::debug!("Updated server count for bot {}", bot_id);

        Ok(())
    }
}
