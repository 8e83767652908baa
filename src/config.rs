use anyhow::{Context, Result};
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite://postboard.db";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 15;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct BlogConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: SocketAddr,
    pub max_body_bytes: usize,
}

impl BlogConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so callers other than
    /// the process environment can provide values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|&val| val > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let raw_bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = raw_bind_address
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDRESS {:?} is not a socket address", raw_bind_address))?;

        let max_body_bytes = lookup("MAX_BODY_BYTES")
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
            max_body_bytes,
        })
    }
}
