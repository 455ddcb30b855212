//! User factory for creating test user entities.

use crate::{
    factory::helpers::next_id,
    fixture::user::{entity_builder, UserEntityBuilder},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable rank flags.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db).admin().build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    builder: UserEntityBuilder,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with an auto-incremented id and no rank.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            builder: entity_builder()
                .id(id.to_string())
                .name(format!("User {}", id)),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.builder = self.builder.id(id);
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.builder = self.builder.verified(verified);
        self
    }

    pub fn tester(mut self, tester: bool) -> Self {
        self.builder = self.builder.tester(tester);
        self
    }

    pub fn translator(mut self, translator: bool) -> Self {
        self.builder = self.builder.translator(translator);
        self
    }

    pub fn moderator(mut self) -> Self {
        self.builder = self.builder.moderator();
        self
    }

    pub fn assistant(mut self) -> Self {
        self.builder = self.builder.assistant();
        self
    }

    pub fn admin(mut self) -> Self {
        self.builder = self.builder.admin();
        self
    }

    /// Sets the staff rank flags exactly as given, for users outside the usual hierarchy.
    pub fn staff_flags(mut self, admin: bool, assistant: bool, moderator: bool) -> Self {
        self.builder = self.builder.staff_flags(admin, assistant, moderator);
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel::from(self.builder.build())
            .reset_all()
            .insert(self.db)
            .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
