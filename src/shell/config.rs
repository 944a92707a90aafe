use crate::shared::core::primitives::MILLIS_PER_DAY;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TTL_DAYS: i64 = 14;
pub const DEFAULT_EXPIRY_SWEEP_SECS: u64 = 60;
pub const DEFAULT_OUTBOX_TOPIC: &str = "profile-requests.v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub default_ttl_days: i64,
    pub expiry_sweep_interval: Duration,
    pub outbox_topic: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any key lookup. Unset or blank keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = read("REQUESTS_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "REQUESTS_BIND_ADDR",
                reason: e.to_string(),
            })?;

        let default_ttl_days = match read("REQUESTS_DEFAULT_TTL_DAYS") {
            Some(raw) => positive("REQUESTS_DEFAULT_TTL_DAYS", &raw)?,
            None => DEFAULT_TTL_DAYS,
        };
        if default_ttl_days.checked_mul(MILLIS_PER_DAY).is_none() {
            return Err(ConfigError::Invalid {
                name: "REQUESTS_DEFAULT_TTL_DAYS",
                reason: format!("{default_ttl_days} days does not fit in milliseconds"),
            });
        }

        let sweep_secs = match read("REQUESTS_EXPIRY_SWEEP_SECS") {
            Some(raw) => positive("REQUESTS_EXPIRY_SWEEP_SECS", &raw)? as u64,
            None => DEFAULT_EXPIRY_SWEEP_SECS,
        };

        let outbox_topic =
            read("REQUESTS_OUTBOX_TOPIC").unwrap_or_else(|| DEFAULT_OUTBOX_TOPIC.to_string());

        Ok(Self {
            bind_addr,
            default_ttl_days,
            expiry_sweep_interval: Duration::from_secs(sweep_secs),
            outbox_topic,
        })
    }

    pub fn default_ttl_ms(&self) -> i64 {
        self.default_ttl_days.saturating_mul(MILLIS_PER_DAY)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            default_ttl_days: DEFAULT_TTL_DAYS,
            expiry_sweep_interval: Duration::from_secs(DEFAULT_EXPIRY_SWEEP_SECS),
            outbox_topic: DEFAULT_OUTBOX_TOPIC.to_string(),
        }
    }
}

fn positive(name: &'static str, raw: &str) -> Result<i64, ConfigError> {
    match raw.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        Ok(value) => Err(ConfigError::Invalid {
            name,
            reason: format!("must be greater than zero, got {value}"),
        }),
        Err(e) => Err(ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
    }
}
