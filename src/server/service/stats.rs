//! Directory statistics service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bot::BotRepository, server::ServerRepository, user::UserRepository},
    error::AppError,
    model::stats::{BotStats, DirectoryStats, UserStats},
};

/// Service computing aggregate counts over every directory collection.
pub struct StatsService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes directory statistics.
    ///
    /// Scans the flags of every bot and user and counts servers on each call; nothing
    /// is cached between requests.
    ///
    /// # Returns
    /// - `Ok(DirectoryStats)` - Fresh aggregate counts
    /// - `Err(AppError::DbErr)` - Database error during any scan
    pub async fn get_stats(&self) -> Result<DirectoryStats, AppError> {
        let servers = ServerRepository::new(self.db).count().await?;
        let bot_flags = BotRepository::new(self.db).get_status_flags().await?;
        let user_ranks = UserRepository::new(self.db).get_ranks().await?;

        Ok(DirectoryStats {
            servers,
            bots: BotStats::tally(&bot_flags),
            users: UserStats::tally(&user_ranks),
        })
    }
}
