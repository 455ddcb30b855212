//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests (redaction, statistics
//! tallies, DTO conversion) and serve as the default values used by the factories.
//! Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let bot = fixture::bot::entity();
//!
//! let verified = fixture::bot::entity_builder()
//!     .verified(true)
//!     .build();
//! ```

pub mod bot;
pub mod server;
pub mod user;

pub use bot::{entity as bot_entity, entity_builder as bot_entity_builder};
pub use server::{entity as server_entity, entity_builder as server_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
