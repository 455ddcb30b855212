//! Server data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use crate::server::model::server::Server;

/// Repository providing read access to listed servers.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a server by its ID.
    ///
    /// # Arguments
    /// - `id` - Discord guild ID as stored
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - Server found
    /// - `Ok(None)` - No server with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Server::from_entity))
    }

    /// Counts listed servers.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Server::find().count(self.db).await
    }
}
