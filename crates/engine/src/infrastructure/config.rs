//! Application configuration

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FIXTURE_PATH: &str = "briv.json";

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// JSON fixture used to seed an empty store at startup
    pub character_fixture_path: PathBuf,
    /// CORS allowed origins (comma-separated, or "*" for any). `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SERVER_PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            character_fixture_path: lookup("CHARACTER_FIXTURE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_PATH)),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .with_context(|| {
                format!(
                    "SERVER_HOST/SERVER_PORT do not form a socket address: {}:{}",
                    self.server_host, self.server_port
                )
            })
    }
}

/// Load `.env.local` then `.env` from `dir`, if present.
///
/// Values already set in the process environment win over both files.
pub fn load_dotenv_from(dir: &Path) {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
