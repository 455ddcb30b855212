//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading user profiles and the rank
//! flags used by directory statistics.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QuerySelect};

use crate::server::model::user::{User, UserRank};

/// Repository providing read access to site users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Arguments
    /// - `id` - Discord user ID as stored
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets the rank flags of every user.
    ///
    /// Selects only the rank columns so statistics don't load full profiles.
    ///
    /// # Returns
    /// - `Ok(Vec<UserRank>)` - One entry per user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_ranks(&self) -> Result<Vec<UserRank>, DbErr> {
        use entity::user::Column;

        let rows: Vec<(bool, bool, bool, bool, bool, bool, bool)> = entity::prelude::User::find()
            .select_only()
            .column(Column::RankAdmin)
            .column(Column::RankAssistant)
            .column(Column::RankMod)
            .column(Column::RankPremium)
            .column(Column::RankTester)
            .column(Column::RankTranslator)
            .column(Column::RankVerified)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(
                |(admin, assistant, moderator, premium, tester, translator, verified)| UserRank {
                    admin,
                    assistant,
                    moderator,
                    premium,
                    tester,
                    translator,
                    verified,
                },
            )
            .collect())
    }
}
