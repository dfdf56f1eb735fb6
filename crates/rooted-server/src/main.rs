//! Rooted Server - booking and commerce backend for the Rooted in Speech practice
//!
//! Registers users, lists services, books appointments and records
//! checkouts against MongoDB. All routes are public.

mod config;
mod routes;
mod state;

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rooted_core::MongoDb;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rooted_server=info,rooted_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting Rooted Server on {}:{}", config.host, config.port);

    // Initialize database
    info!("Connecting to database: {}", config.database_url);
    let db = MongoDb::connect(&config.database_url, &config.database_name).await?;

    // Create app state
    let state = Arc::new(AppState { db: Arc::new(db) });

    // Build router
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/seed-services", post(routes::services::seed_services))
        .route("/api/services", get(routes::services::list_services))
        .route("/api/register", post(routes::auth::register))
        .route("/api/login", post(routes::auth::login))
        .route(
            "/api/appointments",
            post(routes::appointments::create_appointment),
        )
        .route(
            "/api/appointments",
            get(routes::appointments::list_appointments),
        )
        .route("/api/checkout", post(routes::orders::create_checkout))
        .route("/api/orders", get(routes::orders::list_orders))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn root() -> &'static str {
    "Rooted in Speech API"
}

async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    // Check database connection
    match state.db.ping().await {
        Ok(_) => Ok(Json(serde_json::json!({
            "status": "healthy",
            "database": "connected",
            "version": env!("CARGO_PKG_VERSION")
        }))),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
