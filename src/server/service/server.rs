//! Server service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{data::server::ServerRepository, error::AppError, model::server::Server};

pub const UNKNOWN_SERVER_MESSAGE: &str = "Unknown Server";

pub struct ServerService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a server by ID.
    ///
    /// # Returns
    /// - `Ok(Server)` - Server found
    /// - `Err(AppError::NotFound)` - No server with that ID (`Unknown Server`)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_server(&self, id: &str) -> Result<Server, AppError> {
        let server_repo = ServerRepository::new(self.db);

        server_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(UNKNOWN_SERVER_MESSAGE.to_string()))
    }
}
