//! HTTP handlers.

pub mod employee_handler;
pub mod health_handler;

pub use employee_handler::employee_routes;
pub use health_handler::{health_routes, welcome};
