//! Shared configuration structures.

use std::env;

/// Base service configuration shared by all binaries.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from `{PREFIX}_HOST`, `{PREFIX}_PORT` and `LOG_LEVEL`,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env(service_name: &str, prefix: &str) -> Self {
        let defaults = Self {
            service_name: service_name.to_string(),
            ..Self::default()
        };

        Self {
            host: env::var(format!("{}_HOST", prefix)).unwrap_or(defaults.host),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            service_name: defaults.service_name,
        }
    }

    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_prefix_uses_defaults() {
        let config = ServiceConfig::from_env("directory", "COMMON_CONFIG_TEST_UNSET");
        assert_eq!(config.service_name, "directory");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_addr() {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..ServiceConfig::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }
}
