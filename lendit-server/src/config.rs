//! Environment-driven server configuration.

use std::env;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Allow any origin (default: false = localhost only)
    pub cors_permissive: bool,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: env::var("LENDIT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("LENDIT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "mysql://localhost/lendit".to_string()),
            cors_permissive: env::var("LENDIT_CORS_PERMISSIVE")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "mysql://localhost/lendit".to_string(),
            cors_permissive: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.cors_permissive);
    }
}
