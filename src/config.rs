//! Service configuration read from environment variables.

use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_UPSTREAM_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the standalone server binds. Unused on Vercel.
    pub listen_addr: SocketAddr,
    /// Base of the upstream API; release paths are appended to it.
    pub upstream_base_url: Url,
    /// Overall deadline for one upstream request. `None` means no deadline.
    pub upstream_timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_map(&env_map())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let listen_addr = get(vars, "LISTEN_ADDR", DEFAULT_LISTEN_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("LISTEN_ADDR", e.to_string()))?;

        let upstream_base_url = parse_base_url(&get(
            vars,
            "UPSTREAM_API_URL",
            DEFAULT_UPSTREAM_API_URL,
        ))?;

        let upstream_timeout = match optional(vars, "UPSTREAM_TIMEOUT_SECS") {
            None => None,
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(
                        "UPSTREAM_TIMEOUT_SECS",
                        "must be greater than zero",
                    ))
                }
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => return Err(ConfigError::invalid("UPSTREAM_TIMEOUT_SECS", e.to_string())),
            },
        };

        Ok(Self {
            listen_addr,
            upstream_base_url,
            upstream_timeout,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::invalid("UPSTREAM_API_URL", e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(
            "UPSTREAM_API_URL",
            format!("unsupported scheme {}", url.scheme()),
        ));
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::invalid("UPSTREAM_API_URL", "cannot be a base url"));
    }
    Ok(url)
}

fn env_map() -> HashMap<String, String> {
    env::vars().collect()
}

fn get(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key)
        .cloned()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn optional(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key).cloned().filter(|v| !v.is_empty())
}
