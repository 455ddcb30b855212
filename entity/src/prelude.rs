pub use super::bot::Entity as Bot;
pub use super::server::Entity as Server;
pub use super::user::Entity as User;
