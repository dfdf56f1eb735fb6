//! Registration and login routes

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use rooted_core::models::{LoginRequest, RegisterRequest, UserResponse};
use rooted_core::services::AuthService;
use rooted_core::store::MongoUserStore;
use rooted_core::ApiError;

use crate::state::AppState;

fn auth_service(state: &AppState) -> AuthService {
    AuthService::new(Arc::new(MongoUserStore::new(state.db.clone())))
}

/// Register a new user
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = auth_service(&state).register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = auth_service(&state).login(request).await?;
    Ok(Json(user))
}
