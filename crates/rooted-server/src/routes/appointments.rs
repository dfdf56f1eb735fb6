//! Appointment booking and listing routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use rooted_core::models::{AppointmentResponse, BookAppointmentRequest};
use rooted_core::services::BookingService;
use rooted_core::store::MongoAppointmentStore;
use rooted_core::ApiError;

use crate::state::AppState;

fn booking_service(state: &AppState) -> BookingService {
    BookingService::new(Arc::new(MongoAppointmentStore::new(state.db.clone())))
}

/// Book an appointment. Rejected with the conflict error when another
/// appointment already holds the exact `start_time_iso` string.
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let id = booking_service(&state).book(request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// Query parameters for listing appointments
#[derive(Debug, Deserialize)]
pub struct ListAppointmentsQuery {
    pub user_id: Option<String>,
}

/// List appointments, optionally filtered by user
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, ApiError> {
    let appointments = booking_service(&state)
        .list(query.user_id.as_deref())
        .await?;
    Ok(Json(appointments))
}
