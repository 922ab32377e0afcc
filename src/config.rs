use std::{env, net::SocketAddr};

/// Address the server binds to when `APP_BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Loads environment variables from `.env` when available.
///
/// Missing files are ignored so the function is safe in production builds
/// where dotenv files are not deployed.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Constructs the configuration by reading and validating environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = env::var("APP_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = value.parse().map_err(ConfigError::BindAddress)?;

        Ok(Self { bind_addr })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid APP_BIND_ADDR value: {0}")]
    BindAddress(std::net::AddrParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{LazyLock, Mutex};

    static ENV_GUARD: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    #[test]
    fn test_default_bind_addr() {
        let _guard = ENV_GUARD.lock().expect("env guard poisoned");
        env::remove_var("APP_BIND_ADDR");

        let config = ServerConfig::from_env().expect("config should load with defaults");
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_bind_addr_override() {
        let _guard = ENV_GUARD.lock().expect("env guard poisoned");
        env::set_var("APP_BIND_ADDR", "127.0.0.1:9000");

        let config = ServerConfig::from_env().expect("config should load");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");

        env::remove_var("APP_BIND_ADDR");
    }

    #[test]
    fn test_invalid_bind_addr() {
        let _guard = ENV_GUARD.lock().expect("env guard poisoned");
        env::set_var("APP_BIND_ADDR", "not-an-address");

        let err = ServerConfig::from_env().expect_err("invalid address should error");
        assert!(matches!(err, ConfigError::BindAddress(_)));

        env::remove_var("APP_BIND_ADDR");
    }
}
