//! Gateway configuration.

use common::ServiceConfig;
use employee_service_lib::config::EmployeeServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Bind address and logging settings
    pub service: ServiceConfig,
    /// Embedded directory settings
    pub directory: EmployeeServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            service: ServiceConfig::from_env("gateway", "GATEWAY"),
            directory: EmployeeServiceConfig::from_env(),
        }
    }

    /// Override the bind address with command-line values.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }

    /// Full `host:port` address to bind.
    pub fn addr(&self) -> String {
        self.service.addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_bind_overrides_only_given_values() {
        let config = GatewayConfig::default().with_bind(None, Some(9090));
        assert_eq!(config.addr(), "0.0.0.0:9090");

        let config = config.with_bind(Some("127.0.0.1".to_string()), None);
        assert_eq!(config.addr(), "127.0.0.1:9090");
    }
}
