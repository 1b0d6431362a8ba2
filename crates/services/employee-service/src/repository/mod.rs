//! Repository layer for data access.

mod employee_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
