//! SeaORM entities for the bot list document collections.
//!
//! Each collection is stored as one table. Scalar fields that are queried or
//! counted get their own column; nested sub-documents (links, avatars, votes,
//! preferences, ...) are stored as JSON columns.

pub mod prelude;

pub mod bot;
pub mod server;
pub mod user;
