//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! directory entries and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary,
//! which is where each entity's public projection is applied.

pub mod account;
pub mod bot;
pub mod server;
pub mod stats;
pub mod user;
