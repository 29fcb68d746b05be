// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::fleet_service::FleetService;
use crate::application::patient_service::PatientService;
use crate::application::status_service::StatusService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_repository::InMemoryDeviceRepository;
use crate::infrastructure::sample_data::{example_adc, example_devices, example_patient};
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pupsys=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create repository (infrastructure layer)
    let devices = example_devices();
    let repository = Arc::new(InMemoryDeviceRepository::new(devices.clone()));

    // Create services (application layer)
    let fleet_service = FleetService::new(repository.clone(), devices);
    let status_service = StatusService::new(
        repository,
        app_config.thresholds.clone(),
        app_config.sensors.sample_interval_secs,
        example_adc()?,
    );
    let patient_service = PatientService::new(example_patient());

    // Create application state
    let state = Arc::new(AppState {
        fleet_service,
        status_service,
        patient_service,
        compress_responses: app_config.server.compress_responses,
    });

    // Build router (presentation layer)
    let router = presentation::router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = app_config.server.bind_address.parse()?;
    tracing::info!("Starting pupsys status service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
