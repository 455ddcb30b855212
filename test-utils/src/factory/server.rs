//! Server factory for creating test server entities.

use crate::{
    factory::helpers::next_id,
    fixture::server::{entity_builder, ServerEntityBuilder},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    builder: ServerEntityBuilder,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with an auto-incremented id.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            builder: entity_builder()
                .id(id.to_string())
                .name(format!("Server {}", id)),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.builder = self.builder.id(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.builder = self.builder.name(name);
        self
    }

    /// Builds and inserts the server entity into the database.
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel::from(self.builder.build())
            .reset_all()
            .insert(self.db)
            .await
    }
}

/// Creates a server with default values.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
