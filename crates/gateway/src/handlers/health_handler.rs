//! Landing and health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;

use crate::state::AppState;

/// Greeting served at the root path.
pub const WELCOME_MESSAGE: &str = "Welcome to the Employee Directory API";

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    /// Service name from configuration
    pub service: String,
    /// Number of records in the directory
    pub employees: usize,
}

/// Create health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Landing endpoint
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Health check, reporting the directory size
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let employees = state.employee_service.count_employees().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service.service_name.clone(),
        employees,
    }))
}
