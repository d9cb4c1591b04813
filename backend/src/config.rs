//! Server configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime settings for the HTTP server binary.
///
/// # Environment Variables
/// - `HOST` (optional, default: `0.0.0.0`)
/// - `PORT` (optional, default: `8080`)
/// - `API_TOKEN` (optional): bearer token required on `/api/*`
/// - `REPOSITORY_CONFIG` (optional): path to a `repository.toml`; when unset
///   the standard locations are searched, then `REPOSITORY_TYPE` is used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_token: Option<String>,
    pub repository_config: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_token: None,
            repository_config: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl ServerConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let port = match non_empty_var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT '{}' is not a valid port: {}", raw, e))?,
            None => defaults.port,
        };

        Ok(Self {
            host: non_empty_var("HOST").unwrap_or(defaults.host),
            port,
            api_token: non_empty_var("API_TOKEN"),
            repository_config: non_empty_var("REPOSITORY_CONFIG").map(PathBuf::from),
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}
