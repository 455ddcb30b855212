//! Request middleware.
//!
//! - `auth` - API token gate, bypass policy and per-token quota headers
//! - `client_ip` - Caller address resolution from proxy headers or the TCP peer

pub mod auth;
pub mod client_ip;
