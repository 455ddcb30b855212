//! Bot data repository for database operations.
//!
//! This module provides the `BotRepository` for reading bot documents, resolving API
//! tokens to accounts and recording the server counts bots post back.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::{
    account::Account,
    bot::{Bot, BotStatusFlags, UpdateServerCountParam},
};

/// Repository providing database operations for bots.
pub struct BotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotRepository<'a> {
    /// Creates a new BotRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BotRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a bot by its ID.
    ///
    /// # Arguments
    /// - `id` - Bot ID as stored (Discord snowflake string)
    ///
    /// # Returns
    /// - `Ok(Some(Bot))` - Bot found
    /// - `Ok(None)` - No bot with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Bot>, DbErr> {
        let entity = entity::prelude::Bot::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Bot::from_entity))
    }

    /// Resolves an API token to the account of the bot owning it.
    ///
    /// Performs an exact match against the unique token column. Has no side effects.
    ///
    /// # Arguments
    /// - `token` - Token presented in the `Authorization` header
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - A bot owns this token
    /// - `Ok(None)` - Token unknown
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_account_by_token(&self, token: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Bot::find()
            .filter(entity::bot::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Gets every listed bot, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Bot>)` - All bots (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Bot>, DbErr> {
        let entities = entity::prelude::Bot::find()
            .order_by_asc(entity::bot::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bot::from_entity).collect())
    }

    /// Gets the approval and verification flags of every bot.
    ///
    /// Selects only the two flag columns so statistics don't load full documents.
    ///
    /// # Returns
    /// - `Ok(Vec<BotStatusFlags>)` - One entry per bot
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_status_flags(&self) -> Result<Vec<BotStatusFlags>, DbErr> {
        let rows: Vec<(bool, bool)> = entity::prelude::Bot::find()
            .select_only()
            .column(entity::bot::Column::Approved)
            .column(entity::bot::Column::Verified)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(approved, verified)| BotStatusFlags { approved, verified })
            .collect())
    }

    /// Sets a bot's public server count.
    ///
    /// # Arguments
    /// - `param` - Bot ID and the validated new count
    ///
    /// # Returns
    /// - `Ok(true)` - Count updated
    /// - `Ok(false)` - No bot with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_server_count(&self, param: UpdateServerCountParam) -> Result<bool, DbErr> {
        let result = entity::prelude::Bot::update_many()
            .filter(entity::bot::Column::Id.eq(param.bot_id))
            .col_expr(
                entity::bot::Column::ServerCount,
                Expr::value(param.server_count),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
