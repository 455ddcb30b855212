//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Rate limiter holding every token's quota
//! - Access policy with the bypass address sets

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{middleware::auth::AccessPolicy, service::rate_limit::RateLimiter};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle, the rate
/// limiter shares its quota map through an `Arc`, and the access policy is wrapped in
/// one.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the directory collections.
    pub db: DatabaseConnection,

    /// Process-wide per-token quota store used by the authorization gate.
    pub rate_limiter: RateLimiter,

    /// Caller addresses exempt from the gate, and whether proxy headers are trusted.
    pub access: Arc<AccessPolicy>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `rate_limiter` - Quota store shared by every request
    /// - `access` - Bypass sets and proxy trust setting
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, rate_limiter: RateLimiter, access: AccessPolicy) -> Self {
        Self {
            db,
            rate_limiter,
            access: Arc::new(access),
        }
    }
}
