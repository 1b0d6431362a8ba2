//! Employee service configuration.

use std::env;

/// Employee service configuration.
#[derive(Debug, Clone)]
pub struct EmployeeServiceConfig {
    /// Load the sample employees at startup
    pub seed_data: bool,
}

impl EmployeeServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed_data: env::var("EMPLOYEE_SEED_DATA")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for EmployeeServiceConfig {
    fn default() -> Self {
        Self { seed_data: true }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
