//! Token authorization gate for the public API.
//!
//! Every `/v1` request runs through `require_token`, which resolves the caller address,
//! reads the `Authorization` header and hands both to `AuthGuard::authorize`. The guard
//! evaluates its checks in a fixed order and stops at the first failure:
//!
//! 1. caller address in the bypass set for the request's scope: admitted, no lookup
//!    and no quota consumed;
//! 2. no `Authorization` header, or an empty one: 401;
//! 3. token unknown to the store: 403;
//! 4. quota exhausted for the token: 429 with a retry delay.
//!
//! Admitted requests carry an `Admission` in their extensions for handlers that need
//! to know who is calling, and non-bypassed responses are stamped with the caller's
//! remaining quota.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::AUTHORIZATION, HeaderName, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use std::{
    collections::HashSet,
    net::{IpAddr, SocketAddr},
};

use crate::server::{
    config::Config,
    data::bot::BotRepository,
    error::{auth::AuthError, AppError},
    middleware::client_ip,
    model::account::Account,
    service::rate_limit::{QuotaSnapshot, RateLimiter},
    state::AppState,
};

pub const X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
pub const X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
pub const X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Kind of access a request needs, which selects the bypass set consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    Read,
    Write,
}

impl AccessScope {
    /// `GET` and `HEAD` are reads, every other method is a write.
    pub fn for_method(method: &Method) -> Self {
        if *method == Method::GET || *method == Method::HEAD {
            Self::Read
        } else {
            Self::Write
        }
    }
}

/// Caller addresses exempt from the gate.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    api_bypass: HashSet<IpAddr>,
    write_bypass: HashSet<IpAddr>,
    trust_proxy_headers: bool,
}

impl AccessPolicy {
    pub fn new(
        api_bypass: impl IntoIterator<Item = IpAddr>,
        write_bypass: impl IntoIterator<Item = IpAddr>,
        trust_proxy_headers: bool,
    ) -> Self {
        Self {
            api_bypass: api_bypass.into_iter().collect(),
            write_bypass: write_bypass.into_iter().collect(),
            trust_proxy_headers,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_bypass_ips.iter().copied(),
            config.write_bypass_ips.iter().copied(),
            config.trust_proxy_headers,
        )
    }

    pub fn trust_proxy_headers(&self) -> bool {
        self.trust_proxy_headers
    }

    /// Whether the caller skips the gate for the given scope.
    ///
    /// Reads consult `IP_WHITELIST`, writes consult `WRITE_BYPASS_IPS`. An unknown
    /// caller address is never bypassed.
    pub fn is_bypassed(&self, scope: AccessScope, caller: Option<IpAddr>) -> bool {
        let Some(caller) = caller else {
            return false;
        };

        match scope {
            AccessScope::Read => self.api_bypass.contains(&caller),
            AccessScope::Write => self.write_bypass.contains(&caller),
        }
    }
}

/// Outcome of a request admitted by the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// Caller address is allow-listed; no token was checked.
    Bypassed,
    /// Caller presented a valid token and had quota left.
    Authenticated {
        account: Account,
        quota: QuotaSnapshot,
    },
}

impl Admission {
    /// Requires that the caller may modify the given bot.
    ///
    /// # Returns
    /// - `Ok(())` - Caller was bypassed, or its token belongs to the bot
    /// - `Err(AuthError::NotOwner)` - Token belongs to a different bot
    pub fn require_owner(&self, bot_id: &str) -> Result<(), AuthError> {
        match self {
            Self::Bypassed => Ok(()),
            Self::Authenticated { account, .. } if account.owns_bot(bot_id) => Ok(()),
            Self::Authenticated { account, .. } => Err(AuthError::NotOwner {
                account_bot_id: account.bot_id.clone(),
                target_bot_id: bot_id.to_string(),
            }),
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    rate_limiter: &'a RateLimiter,
    access: &'a AccessPolicy,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        rate_limiter: &'a RateLimiter,
        access: &'a AccessPolicy,
    ) -> Self {
        Self {
            db,
            rate_limiter,
            access,
        }
    }

    /// Admits or rejects a single request.
    ///
    /// # Arguments
    /// - `scope` - Whether the request reads or writes
    /// - `caller` - Resolved caller address, if known
    /// - `token` - Raw `Authorization` header value, if present
    ///
    /// # Returns
    /// - `Ok(Admission)` - Request may proceed
    /// - `Err(AppError::AuthErr)` - Missing token (401), unknown token (403) or
    ///   exhausted quota (429)
    /// - `Err(AppError::DbErr)` - Token lookup failed
    pub async fn authorize(
        &self,
        scope: AccessScope,
        caller: Option<IpAddr>,
        token: Option<&str>,
    ) -> Result<Admission, AppError> {
        if self.access.is_bypassed(scope, caller) {
            return Ok(Admission::Bypassed);
        }

        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return Err(AuthError::MissingToken.into());
        };

        let bot_repo = BotRepository::new(self.db);
        let account = match bot_repo.find_account_by_token(token).await? {
            Some(account) if account.token == token => account,
            _ => return Err(AuthError::InvalidToken.into()),
        };

        let quota = self
            .rate_limiter
            .consume(&account.token, account.cost())
            .await
            .map_err(|exceeded| AuthError::RateLimited {
                retry_after_secs: exceeded.retry_after_secs(),
            })?;

        Ok(Admission::Authenticated { account, quota })
    }
}

/// Middleware gating a route behind the API token check.
///
/// Stores the resulting `Admission` in the request extensions and, for authenticated
/// callers, adds `X-RateLimit-Limit`, `X-RateLimit-Remaining` and `X-RateLimit-Reset`
/// (milliseconds until the window resets) to the response.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let caller = client_ip::resolve(request.headers(), peer, state.access.trust_proxy_headers());
    let scope = AccessScope::for_method(request.method());
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let admission = AuthGuard::new(&state.db, &state.rate_limiter, &state.access)
        .authorize(scope, caller, token.as_deref())
        .await?;

    let quota = match &admission {
        Admission::Authenticated { quota, .. } => Some(*quota),
        Admission::Bypassed => None,
    };

    request.extensions_mut().insert(admission);
    let mut response = next.run(request).await;

    if let Some(quota) = quota {
        let headers = response.headers_mut();
        headers.insert(X_RATELIMIT_LIMIT, HeaderValue::from(quota.limit));
        headers.insert(X_RATELIMIT_REMAINING, HeaderValue::from(quota.remaining));
        headers.insert(
            X_RATELIMIT_RESET,
            HeaderValue::from(u64::try_from(quota.reset_after.as_millis()).unwrap_or(u64::MAX)),
        );
    }

    Ok(response)
}
