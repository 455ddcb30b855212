//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the bot list API: HTTP endpoints, the
//! token authorization gate, business logic and data access. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic plus the per-token rate limiter
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, redaction and parameter validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token gate and caller address resolution
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, rate limiter, access policy)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; unmatched paths and methods get `Unknown Endpoint`
//! 2. **Middleware** admits or rejects `/v1` requests (bypass, token, quota)
//! 3. **Controller** extracts parameters and calls the service
//! 4. **Service** applies lookups, ordering and validation over repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** projects the domain model into its public DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
mod test;
