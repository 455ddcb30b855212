//! Database repository layer for the directory collections.
//!
//! This module contains repository structs that handle database operations for bots,
//! servers and users. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod bot;
pub mod server;
pub mod user;
