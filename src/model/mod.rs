//! Wire-level DTOs shared by every endpoint.

pub mod api;
pub mod bot;
pub mod server;
pub mod stats;
pub mod user;
