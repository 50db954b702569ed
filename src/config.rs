//! Environment-driven server configuration.
//!
//! Reads settings from the process environment, with an optional `.env`
//! file loaded via dotenvy. Only `DATABASE_URL` is required; everything
//! else has a sensible default.

use std::env;
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `DATABASE_URL` was not set.
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    /// A variable was set to a value that does not parse.
    #[error("invalid {name}: {value:?}")]
    InvalidValue {
        /// The offending variable name.
        name: &'static str,
        /// The raw value found in the environment.
        value: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    bind_address: String,
    database_url: String,
    pool_size: u32,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Recognised variables:
    ///
    /// - `DATABASE_URL` (required) — `PostgreSQL` connection string
    /// - `PINBOARD_BIND_ADDRESS` — listen address, default `127.0.0.1:3000`
    /// - `PINBOARD_POOL_SIZE` — connection pool size, default `10`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let bind_address = env::var("PINBOARD_BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned());
        let pool_size = env::var("PINBOARD_POOL_SIZE").map_or(Ok(DEFAULT_POOL_SIZE), |raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PINBOARD_POOL_SIZE",
                value: raw,
            })
        })?;

        Ok(Self {
            bind_address,
            database_url,
            pool_size,
        })
    }

    /// Returns the listen address.
    #[must_use]
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// Returns the database connection string.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the connection pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }
}
