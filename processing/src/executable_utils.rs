use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use clap::Parser;
use common::config::{Config, ServerConfig};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::{error::Error, net::SocketAddr};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    error::ProcessingError,
    model::{PointsResponse, ProcessResponse, Receipt},
    processor::ReceiptProcessor,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,
}

pub fn initialize_executable() -> Result<Config, Box<dyn Error + Send + Sync>> {
    let args = Args::parse();
    load_config(args.config.as_deref())
}

pub fn load_config(path: Option<&str>) -> Result<Config, Box<dyn Error + Send + Sync>> {
    match path {
        Some(path) => {
            println!("Loading config from: {}", path);
            Config::load(path)
        }
        None => Ok(Config::default()),
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn initialize_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Tracing already initialized: {}", e);
    }
}

/// Installs the global Prometheus recorder and serves `/metrics` on
/// `metrics_address`. Must be called from within a tokio runtime.
pub fn initialize_metrics(metrics_address: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr: SocketAddr = metrics_address.parse()?;
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install metrics recorder: {}", e))?;

    tracing::info!("Serving metrics at {}", addr);
    Ok(())
}

pub fn router(processor: ReceiptProcessor) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(processor)
}

pub async fn run_backend(
    config: ServerConfig,
    processor: ReceiptProcessor,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = router(processor);

    tracing::info!("Starting receipt service at {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn process_receipt(
    State(processor): State<ReceiptProcessor>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ProcessingError> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Malformed receipt body");
        ProcessingError::MalformedInput(rejection.body_text())
    })?;

    let id = processor.process(&receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

pub async fn get_points(
    State(processor): State<ReceiptProcessor>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ProcessingError> {
    let points = processor.points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}
