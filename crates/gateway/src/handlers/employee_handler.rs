//! Employee handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{Employee, EmployeeResponse, NewEmployee};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Employee creation request.
///
/// Required fields are optional here so that missing values surface as
/// directory validation errors rather than JSON parse errors.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// Caller-chosen id; generated when absent
    pub id: Option<Uuid>,
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "Analyst")]
    pub job_title: Option<String>,
    #[validate(range(min = 0, message = "Salary cannot be negative"))]
    #[schema(example = 70000)]
    pub salary: Option<i32>,
    #[validate(range(min = 0, message = "Age cannot be negative"))]
    #[schema(example = 36)]
    pub age: Option<i32>,
    /// Defaults to the time of creation
    pub hire_date: Option<DateTime<Utc>>,
    pub termination_date: Option<DateTime<Utc>>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            job_title: req.job_title,
            salary: req.salary,
            age: req.age,
            hire_date: req.hire_date,
            termination_date: req.termination_date,
        }
    }
}

/// Termination request; an absent date means now.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TerminateEmployeeRequest {
    pub termination_date: Option<DateTime<Utc>>,
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/active", get(list_active_employees))
        .route("/job-title/:title", get(list_employees_by_job_title))
        .route("/:id", get(get_employee))
        .route("/:id/terminate", post(terminate_employee))
}

fn parse_employee_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::bad_request(format!("Invalid employee id: {}", raw)))
}

fn to_responses(employees: Vec<Employee>) -> Json<Vec<EmployeeResponse>> {
    Json(employees.into_iter().map(EmployeeResponse::from).collect())
}

/// List every employee
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees in insertion order", body = Vec<EmployeeResponse>)
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(to_responses(employees))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Missing required field or invalid value"),
        (status = 409, description = "Id or email already in use")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state.employee_service.create_employee(req.into()).await?;
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// List employees without a termination date
#[utoipa::path(
    get,
    path = "/api/v1/employee/active",
    tag = "Employees",
    responses(
        (status = 200, description = "Active employees", body = Vec<EmployeeResponse>)
    )
)]
pub async fn list_active_employees(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_active_employees().await?;
    Ok(to_responses(employees))
}

/// List employees by job title, ignoring case
#[utoipa::path(
    get,
    path = "/api/v1/employee/job-title/{title}",
    tag = "Employees",
    params(
        ("title" = String, Path, description = "Job title to match")
    ),
    responses(
        (status = 200, description = "Employees holding the title", body = Vec<EmployeeResponse>)
    )
)]
pub async fn list_employees_by_job_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state
        .employee_service
        .list_employees_by_job_title(title)
        .await?;
    Ok(to_responses(employees))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/v1/employee/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee record", body = EmployeeResponse),
        (status = 400, description = "Malformed employee id"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let id = parse_employee_id(&id)?;
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// Terminate an employee
#[utoipa::path(
    post,
    path = "/api/v1/employee/{id}/terminate",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = TerminateEmployeeRequest,
    responses(
        (status = 200, description = "Employee terminated", body = EmployeeResponse),
        (status = 400, description = "Malformed employee id or body"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn terminate_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<TerminateEmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let id = parse_employee_id(&id)?;
    let employee = state
        .employee_service
        .terminate_employee(id, req.termination_date)
        .await?;
    Ok(Json(EmployeeResponse::from(employee)))
}
