//! Application state for dependency injection.

use std::sync::Arc;

use employee_service_lib::service::EmployeeService;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(employee_service: Arc<dyn EmployeeService>, config: GatewayConfig) -> Self {
        Self {
            employee_service,
            config,
        }
    }
}
