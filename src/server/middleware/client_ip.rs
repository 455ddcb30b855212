//! Caller address resolution.

use axum::http::HeaderMap;
use std::net::IpAddr;

const CF_CONNECTING_IP: &str = "cf-connecting-ip";
const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Resolves the address of the client that made the request.
///
/// When proxy headers are trusted they are consulted in order: `CF-Connecting-IP`,
/// the first entry of `X-Forwarded-For`, then `X-Real-IP`. Unparsable header values
/// are skipped. Falls back to the TCP peer address.
///
/// # Arguments
/// - `headers` - Request headers
/// - `peer` - Address of the TCP peer, if known
/// - `trust_proxy_headers` - Whether forwarding headers may override the peer
///
/// # Returns
/// - `Some(IpAddr)` - Resolved caller address
/// - `None` - No trusted header and no peer address
pub fn resolve(headers: &HeaderMap, peer: Option<IpAddr>, trust_proxy_headers: bool) -> Option<IpAddr> {
    if trust_proxy_headers {
        let forwarded = header_ip(headers, CF_CONNECTING_IP)
            .or_else(|| {
                headers
                    .get(X_FORWARDED_FOR)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.split(',').next())
                    .and_then(|first| first.trim().parse().ok())
            })
            .or_else(|| header_ip(headers, X_REAL_IP));

        if forwarded.is_some() {
            return forwarded;
        }
    }

    peer
}

fn header_ip(headers: &HeaderMap, name: &str) -> Option<IpAddr> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
