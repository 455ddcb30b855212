//! Environment-based application configuration.

use std::net::IpAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub addr: String,
    pub port: u16,

    /// Caller addresses that skip the authorization gate on every `/v1` route.
    pub api_bypass_ips: Vec<IpAddr>,
    /// Caller addresses that skip the gate on write routes.
    pub write_bypass_ips: Vec<IpAddr>,
    /// Whether `CF-Connecting-IP`, `X-Forwarded-For` and `X-Real-IP` are trusted
    /// when resolving the caller address.
    pub trust_proxy_headers: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `var` - Lookup returning the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing `DATABASE_URL` or an unparsable value
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            addr: var("ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            port,
            api_bypass_ips: parse_ip_list("IP_WHITELIST", var("IP_WHITELIST"))?,
            write_bypass_ips: parse_ip_list("WRITE_BYPASS_IPS", var("WRITE_BYPASS_IPS"))?,
            trust_proxy_headers: var("TRUST_PROXY")
                .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// Socket address string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

/// Parses a `;`-separated list of IP addresses, skipping empty entries.
fn parse_ip_list(name: &str, value: Option<String>) -> Result<Vec<IpAddr>, ConfigError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value: entry.to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}
