//! Central module for application-wide configuration settings.
//!
//! Configuration is environment-driven: `DATABASE_URL` is required, while
//! `HOST` and `PORT` fall back to local defaults. A `.env` file is honoured
//! via dotenvy before the environment is read.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen: SocketAddr,
}

impl Config {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|err| ConfigError::InvalidValue {
                    var: "PORT",
                    reason: err.to_string(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        let listen = format!("{host}:{port}")
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::InvalidValue {
                var: "HOST",
                reason: err.to_string(),
            })?;

        Ok(Config {
            database_url,
            listen,
        })
    }
}
