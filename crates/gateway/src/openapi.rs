//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::employee_handler::{CreateEmployeeRequest, TerminateEmployeeRequest};
use crate::handlers::health_handler::HealthResponse;
use domain::EmployeeResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::employee_handler::list_employees,
        crate::handlers::employee_handler::create_employee,
        crate::handlers::employee_handler::list_active_employees,
        crate::handlers::employee_handler::list_employees_by_job_title,
        crate::handlers::employee_handler::get_employee,
        crate::handlers::employee_handler::terminate_employee,
    ),
    components(
        schemas(
            CreateEmployeeRequest,
            TerminateEmployeeRequest,
            EmployeeResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Employees", description = "Employee directory endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
