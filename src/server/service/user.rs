//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

pub const UNKNOWN_USER_MESSAGE: &str = "Unknown User";

/// Service providing business logic for user profiles.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by their Discord ID.
    ///
    /// # Arguments
    /// - `id` - Discord user ID from the request path
    ///
    /// # Returns
    /// - `Ok(User)` - User found with full domain data
    /// - `Err(AppError::NotFound)` - No user with that ID (`Unknown User`)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(UNKNOWN_USER_MESSAGE.to_string()))
    }
}
