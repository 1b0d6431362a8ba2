//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The employee record, its derived fields and the error taxonomy live here.

pub mod constants;
pub mod employee;
pub mod error;

pub use constants::*;
pub use employee::{derive_full_name, Employee, EmployeeResponse, NewEmployee};
pub use error::{DomainError, DomainResult};
