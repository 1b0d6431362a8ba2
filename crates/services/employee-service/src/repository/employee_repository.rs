//! In-memory employee repository with identity and email uniqueness.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::{DomainError, DomainResult, Employee, NewEmployee};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Records handed out are independent copies. All state changes go through
/// repository operations.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Snapshot of every record, in insertion order
    async fn list_all(&self) -> Vec<Employee>;

    /// Find employee by ID
    async fn get_by_id(&self, id: Uuid) -> DomainResult<Employee>;

    /// Validate, default and insert a new record
    async fn create(&self, candidate: NewEmployee) -> DomainResult<Employee>;

    /// Records without a termination date
    async fn list_active(&self) -> Vec<Employee>;

    /// Records whose job title equals `title`, ignoring case
    async fn list_by_job_title(&self, title: &str) -> Vec<Employee>;

    /// Number of stored records
    async fn count(&self) -> usize;

    /// Terminate a record now (`at = None`) or at the given instant
    async fn terminate(&self, id: Uuid, at: Option<DateTime<Utc>>) -> DomainResult<Employee>;
}

/// Records plus the indexes that must change together with them.
#[derive(Debug, Default)]
struct Directory {
    records: HashMap<Uuid, Employee>,
    /// Lowercased email -> id
    emails: HashMap<String, Uuid>,
    order: Vec<Uuid>,
}

impl Directory {
    fn snapshot<F>(&self, keep: F) -> Vec<Employee>
    where
        F: Fn(&Employee) -> bool,
    {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .filter(|&e| keep(e))
            .cloned()
            .collect()
    }

    fn insert(&mut self, employee: Employee) -> DomainResult<Employee> {
        let id = employee.id();
        if self.records.contains_key(&id) {
            return Err(DomainError::conflict(format!("Employee with id {}", id)));
        }

        let email_key = email_key(employee.email());
        if self.emails.contains_key(&email_key) {
            return Err(DomainError::conflict(format!(
                "Employee with email {}",
                employee.email()
            )));
        }

        self.emails.insert(email_key, id);
        self.order.push(id);
        self.records.insert(id, employee.clone());
        Ok(employee)
    }
}

fn email_key(email: &str) -> String {
    email.to_lowercase()
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::not_found(format!("Employee with id {}", id))
}

/// Concrete in-memory implementation of EmployeeRepository.
///
/// A single `RwLock` guards the records and both indexes, so readers run
/// concurrently while each create checks and inserts under one write guard.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    inner: RwLock<Directory>,
}

impl EmployeeStore {
    /// Create an empty repository instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create every candidate in order, stopping at the first failure
    pub async fn seed<I>(&self, candidates: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = NewEmployee> + Send,
        I::IntoIter: Send,
    {
        for candidate in candidates {
            self.create(candidate).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn list_all(&self) -> Vec<Employee> {
        self.inner.read().await.snapshot(|_| true)
    }

    async fn get_by_id(&self, id: Uuid) -> DomainResult<Employee> {
        self.inner
            .read()
            .await
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, candidate: NewEmployee) -> DomainResult<Employee> {
        // Validation and defaults only touch the candidate
        let employee = Employee::from_new(candidate)?;

        let mut directory = self.inner.write().await;
        directory.insert(employee)
    }

    async fn list_active(&self) -> Vec<Employee> {
        self.inner.read().await.snapshot(Employee::is_active)
    }

    async fn list_by_job_title(&self, title: &str) -> Vec<Employee> {
        self.inner.read().await.snapshot(|e| e.has_job_title(title))
    }

    async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }

    async fn terminate(&self, id: Uuid, at: Option<DateTime<Utc>>) -> DomainResult<Employee> {
        let mut directory = self.inner.write().await;
        let employee = directory.records.get_mut(&id).ok_or_else(|| not_found(id))?;

        match at {
            Some(at) => employee.terminate_at(at),
            None => employee.terminate(),
        }

        Ok(employee.clone())
    }
}
