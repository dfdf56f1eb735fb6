//! Appointment model

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::common::object_id_string;

/// Appointment document
///
/// `start_time_iso` is an opaque string and is never parsed or normalized.
/// It is the booking key: the conflict check compares it for exact equality,
/// not for interval overlap. `service_title` is denormalized from the
/// service document as a read optimization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub service_id: String,
    pub service_title: String,
    pub start_time_iso: String,
    pub duration_minutes: i32,
    #[serde(default = "default_status")]
    pub status: String, // scheduled | completed | canceled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

fn default_status() -> String {
    "scheduled".to_string()
}

/// Request to book an appointment
#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub user_id: String,
    pub service_id: String,
    pub service_title: String,
    pub start_time_iso: String,
    pub duration_minutes: i32,
}

/// Appointment response (for API)
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub user_id: String,
    pub service_id: String,
    pub service_title: String,
    pub start_time_iso: String,
    pub duration_minutes: i32,
    pub status: String,
    pub order_id: Option<String>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: object_id_string(&a.id),
            user_id: a.user_id,
            service_id: a.service_id,
            service_title: a.service_title,
            start_time_iso: a.start_time_iso,
            duration_minutes: a.duration_minutes,
            status: a.status,
            order_id: a.order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_scheduled() {
        let doc = bson::doc! {
            "user_id": "u1",
            "service_id": "s1",
            "service_title": "Therapy Session",
            "start_time_iso": "2024-01-01T10:00:00",
            "duration_minutes": 45,
        };
        let appt: Appointment = bson::from_document(doc).unwrap();
        assert_eq!(appt.status, "scheduled");
        assert!(appt.order_id.is_none());
    }

    #[test]
    fn test_start_time_is_stored_verbatim() {
        // Malformed timestamps are accepted and kept as-is
        let doc = bson::doc! {
            "user_id": "u1",
            "service_id": "s1",
            "service_title": "Therapy Session",
            "start_time_iso": "not-a-timestamp",
            "duration_minutes": 45,
        };
        let appt: Appointment = bson::from_document(doc).unwrap();
        assert_eq!(appt.start_time_iso, "not-a-timestamp");
    }

    #[test]
    fn test_response_surfaces_id_as_string() {
        let oid = bson::oid::ObjectId::new();
        let appt = Appointment {
            id: Some(oid),
            user_id: "u1".to_string(),
            service_id: "s1".to_string(),
            service_title: "Therapy Session".to_string(),
            start_time_iso: "2024-01-01T10:00:00".to_string(),
            duration_minutes: 45,
            status: "scheduled".to_string(),
            order_id: None,
        };
        let resp = AppointmentResponse::from(appt);
        assert_eq!(resp.id, oid.to_hex());
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["order_id"].is_null());
    }
}
