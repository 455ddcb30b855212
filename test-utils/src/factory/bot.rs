//! Bot factory for creating test bot entities.

use crate::{
    factory::helpers::{next_id, token_for},
    fixture::bot::{entity_builder, BotEntityBuilder},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

/// Factory for creating test bots with customizable fields.
///
/// Each factory gets a unique id and a token derived from it, so several bots can
/// be created in one test without violating the unique token constraint.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bot::BotFactory;
///
/// let bot = BotFactory::new(&db)
///     .id("123456789012345678")
///     .verified(true)
///     .build()
///     .await?;
/// ```
pub struct BotFactory<'a> {
    db: &'a DatabaseConnection,
    builder: BotEntityBuilder,
    token_overridden: bool,
    id: String,
}

impl<'a> BotFactory<'a> {
    /// Creates a new BotFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented snowflake-like id
    /// - token: derived from the id
    /// - approved/verified: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id().to_string();
        Self {
            db,
            builder: entity_builder().id(id.clone()).name(format!("Bot {}", id)),
            token_overridden: false,
            id,
        }
    }

    /// Sets the bot id. The default token follows the id unless `token` was called.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self.builder = self.builder.id(self.id.clone());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.builder = self.builder.token(token);
        self.token_overridden = true;
        self
    }

    pub fn server_count(mut self, server_count: i64) -> Self {
        self.builder = self.builder.server_count(server_count);
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.builder = self.builder.approved(approved);
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.builder = self.builder.verified(verified);
        self
    }

    /// Builds and inserts the bot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bot::Model)` - Created bot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bot::Model, DbErr> {
        let builder = if self.token_overridden {
            self.builder
        } else {
            self.builder.token(token_for(&self.id))
        };

        entity::bot::ActiveModel::from(builder.build())
            .reset_all()
            .insert(self.db)
            .await
    }
}

/// Creates a bot with default values.
///
/// Shorthand for `BotFactory::new(db).build().await`.
pub async fn create_bot(db: &DatabaseConnection) -> Result<entity::bot::Model, DbErr> {
    BotFactory::new(db).build().await
}
