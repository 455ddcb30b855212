//! Bot List API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the bot
//! list API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, in-memory entity fixtures and database-backed factories.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **fixture**: Entity models built in memory, without touching the database
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_bot_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_directory_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let bot = factory::bot::create_bot(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
