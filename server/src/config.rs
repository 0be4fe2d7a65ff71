//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_HOST`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let bind_host = lookup("BIND_HOST")
            .map(|raw| raw.trim().to_owned())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_HOST.to_owned());
        Ok(Self { bind_host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ServerError> {
    raw.trim().parse::<u16>().map_err(|e| ServerError::Config {
        var: "PORT",
        value: raw.to_owned(),
        reason: e.to_string(),
    })
}
