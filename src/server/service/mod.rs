//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Lookups**: Turning missing documents into the API's `Unknown ...` errors
//! - **Orchestration**: Ordering existence checks, validation and writes
//! - **Aggregation**: Computing directory statistics from repository scans
//!
//! The `rate_limit` module holds the in-memory quota store used by the authorization
//! gate; it is constructed once at startup and shared through `AppState`.

pub mod bot;
pub mod rate_limit;
pub mod server;
pub mod stats;
pub mod user;
