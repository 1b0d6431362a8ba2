//! Employee Service Library
//!
//! This crate provides the employee directory: an in-memory repository that
//! enforces identity and email uniqueness, and the service layer on top of it.
//! It is embedded by the HTTP gateway.

pub mod config;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::config::EmployeeServiceConfig;
use crate::repository::EmployeeStore;
use crate::service::{EmployeeManager, EmployeeService};

/// Build the employee service, loading the sample data when configured.
pub async fn build_service(config: &EmployeeServiceConfig) -> AppResult<Arc<dyn EmployeeService>> {
    let store = EmployeeStore::new();

    if config.seed_data {
        let samples = seed::sample_employees()?;
        let count = samples.len();
        store.seed(samples).await?;
        info!("Seeded {} sample employees", count);
    }

    Ok(Arc::new(EmployeeManager::new(Arc::new(store))))
}
