use std::env;

/// Network configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port value '{0}': must be an integer between 1 and 65535")]
    InvalidPort(String),
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Defaults to `0.0.0.0:3000` when `HOST`/`PORT` are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match port {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => 3000,
        };

        Ok(Self { host, port })
    }

    /// Socket address string for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_vars(None, None).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_explicit_host_and_port() {
        let config =
            ServerConfig::from_vars(Some("127.0.0.1".to_string()), Some("8080".to_string()))
                .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = ServerConfig::from_vars(None, Some("not_a_port".to_string()));

        match result {
            Err(ConfigError::InvalidPort(value)) => assert_eq!(value, "not_a_port"),
            _ => panic!("Expected InvalidPort error"),
        }
    }

    #[test]
    fn test_out_of_range_port_is_rejected() {
        let result = ServerConfig::from_vars(None, Some("65536".to_string()));

        assert!(result.is_err());
    }
}
