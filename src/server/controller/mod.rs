//! HTTP request handlers.
//!
//! Controllers extract request data, call into the service layer and convert domain
//! models into DTOs. Every `/v1` handler runs behind the token gate installed by the
//! router, so none of them authenticate on their own; write handlers only check that
//! the admitted caller owns the document it is changing.

pub mod bot;
pub mod general;
pub mod server;
pub mod stats;
pub mod user;
