//! API Gateway Library
//!
//! HTTP front end for the employee service: a JSON API, server-rendered form
//! pages, health and OpenAPI endpoints.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod pages;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use employee_service_lib::infra::Database;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database (applies pending migrations)
    let database = Arc::new(Database::connect(&config.database).await?);

    // Create app state
    let state = AppState::from_database(database);

    // Build router
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
