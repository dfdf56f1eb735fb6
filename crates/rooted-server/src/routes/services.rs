//! Service catalog routes

use axum::{extract::State, Json};
use std::sync::Arc;

use rooted_core::models::ServiceResponse;
use rooted_core::services::catalog::SeedOutcome;
use rooted_core::services::CatalogService;
use rooted_core::ApiError;

use crate::state::AppState;

/// Public list of services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServiceResponse>>, ApiError> {
    let service = CatalogService::new(state.db.clone());
    let services = service.list().await?;
    Ok(Json(services))
}

/// Seed the default services when the catalog is empty
pub async fn seed_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SeedOutcome>, ApiError> {
    let service = CatalogService::new(state.db.clone());
    let outcome = service.seed_defaults().await?;
    Ok(Json(outcome))
}
