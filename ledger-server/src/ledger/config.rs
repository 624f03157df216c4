//! Ledger and server configuration.

use std::net::SocketAddr;

use crate::domain::MINUTES_PER_DAY;

/// Environment variable overriding the listen address.
pub const ADDR_ENV: &str = "LEDGER_ADDR";

/// Environment variable overriding the leg duration.
pub const LEG_MINUTES_ENV: &str = "LEDGER_LEG_MINUTES";

/// Longest accepted leg duration: one day.
pub const MAX_LEG_MINUTES: u32 = MINUTES_PER_DAY;

/// Error reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be between 1 and {} minutes, got {value:?}", MAX_LEG_MINUTES)]
    InvalidLegMinutes { var: &'static str, value: String },
}

/// Parameters of the timetable model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Duration of every leg between consecutive route stations (minutes).
    pub leg_minutes: u32,
}

impl LedgerConfig {
    /// Create a configuration with the given leg duration.
    ///
    /// Returns `None` unless `leg_minutes` is in `1..=MAX_LEG_MINUTES`.
    pub fn new(leg_minutes: u32) -> Option<Self> {
        (1..=MAX_LEG_MINUTES)
            .contains(&leg_minutes)
            .then_some(Self { leg_minutes })
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { leg_minutes: 60 }
    }
}

/// Configuration for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Timetable model shared by all requests.
    pub ledger: LedgerConfig,
}

impl ServerConfig {
    /// Build the configuration from a variable lookup, falling back to
    /// defaults for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_ENV) {
            config.addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_ENV,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(LEG_MINUTES_ENV) {
            config.ledger = value
                .parse::<u32>()
                .ok()
                .and_then(LedgerConfig::new)
                .ok_or_else(|| ConfigError::InvalidLegMinutes {
                    var: LEG_MINUTES_ENV,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            ledger: LedgerConfig::default(),
        }
    }
}
