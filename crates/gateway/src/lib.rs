//! API Gateway Library
//!
//! This crate provides the JSON HTTP API over the embedded employee directory.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use employee_service_lib::build_service;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the directory and serve the HTTP API until the process stops.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let employee_service = build_service(&config.directory).await?;

    let addr: SocketAddr = config.addr().parse()?;
    let state = AppState::new(employee_service, config);
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
