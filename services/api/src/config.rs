//! Service configuration

use anyhow::{Result, bail};
use std::env;

/// Default origin allowed to call the `/v1` endpoints with credentials
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Document store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via `DATABASE_URL`
    Postgres,
    /// In-process store, lost on restart
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("Unknown STORE_BACKEND: {}", other),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind_addr: String,
    /// Which document store to use
    pub store_backend: StoreBackend,
    /// Origin allowed by the CORS policy of the `/v1` routes
    pub cors_allowed_origin: String,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `BIND_ADDR`: listen address (default: "0.0.0.0:8080")
    /// - `STORE_BACKEND`: `postgres` or `memory` (default: postgres)
    /// - `CORS_ALLOWED_ORIGIN`: allowed origin (default: "http://localhost:3000")
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(value) => StoreBackend::parse(&value)?,
            Err(_) => StoreBackend::Postgres,
        };

        let cors_allowed_origin =
            env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        Ok(ServerConfig {
            bind_addr,
            store_backend,
            cors_allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            env::remove_var("BIND_ADDR");
            env::remove_var("STORE_BACKEND");
            env::remove_var("CORS_ALLOWED_ORIGIN");
        }
    }

    #[test]
    #[serial]
    fn test_server_config_defaults() {
        clear_env();

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.cors_allowed_origin, DEFAULT_CORS_ORIGIN);
    }

    #[test]
    #[serial]
    fn test_server_config_from_env_with_custom_values() {
        unsafe {
            env::set_var("BIND_ADDR", "127.0.0.1:9000");
            env::set_var("STORE_BACKEND", "Memory");
            env::set_var("CORS_ALLOWED_ORIGIN", "https://app.example.com");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.cors_allowed_origin, "https://app.example.com");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_server_config_rejects_unknown_backend() {
        unsafe {
            env::set_var("STORE_BACKEND", "mongodb");
        }

        assert!(ServerConfig::from_env().is_err());

        clear_env();
    }
}
