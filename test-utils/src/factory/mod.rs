//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Defaults come
//! from the matching [`crate::fixture`] with unique ids and tokens.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let bot = factory::bot::create_bot(&db).await?;
//!
//! let verified = factory::bot::BotFactory::new(&db)
//!     .verified(true)
//!     .approved(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `bot` - Create bot documents (bots own the API tokens)
//! - `server` - Create server documents
//! - `user` - Create user documents with rank flags
//! - `helpers` - Shared id generation

pub mod bot;
pub mod helpers;
pub mod server;
pub mod user;

pub use bot::create_bot;
pub use server::create_server;
pub use user::create_user;
