//! Employee service - Handles employee-related business logic.
//!
//! SOLID (SRP): Handles directory use cases only.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use common::AppResult;
use domain::{Employee, NewEmployee};

use crate::repository::EmployeeRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// List every employee, active or not
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Get employee by ID
    async fn get_employee(&self, id: Uuid) -> AppResult<Employee>;

    /// Create a new employee
    async fn create_employee(&self, candidate: NewEmployee) -> AppResult<Employee>;

    /// List employees without a termination date
    async fn list_active_employees(&self) -> AppResult<Vec<Employee>>;

    /// List employees holding the given job title (case-insensitive)
    async fn list_employees_by_job_title(&self, title: String) -> AppResult<Vec<Employee>>;

    /// Terminate an employee now, or at the given instant
    async fn terminate_employee(&self, id: Uuid, at: Option<DateTime<Utc>>) -> AppResult<Employee>;

    /// Number of employees in the directory
    async fn count_employees(&self) -> AppResult<usize>;
}

/// Concrete implementation of EmployeeService using repository.
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance with repository
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.repo.list_all().await)
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        Ok(self.repo.get_by_id(id).await?)
    }

    async fn create_employee(&self, candidate: NewEmployee) -> AppResult<Employee> {
        let employee = self.repo.create(candidate).await?;
        tracing::info!(employee_id = %employee.id(), "Employee created");
        Ok(employee)
    }

    async fn list_active_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.repo.list_active().await)
    }

    async fn list_employees_by_job_title(&self, title: String) -> AppResult<Vec<Employee>> {
        Ok(self.repo.list_by_job_title(&title).await)
    }

    async fn terminate_employee(&self, id: Uuid, at: Option<DateTime<Utc>>) -> AppResult<Employee> {
        let employee = self.repo.terminate(id, at).await?;
        tracing::info!(
            employee_id = %id,
            termination_date = ?employee.termination_date(),
            "Employee terminated"
        );
        Ok(employee)
    }

    async fn count_employees(&self) -> AppResult<usize> {
        Ok(self.repo.count().await)
    }
}
