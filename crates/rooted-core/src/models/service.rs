//! Service catalog model

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::common::object_id_string;

/// Service document (an offering that can be booked or ordered)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_minutes: i32,
}

/// Service response (for API)
#[derive(Debug, Clone, Serialize)]
pub struct ServiceResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_minutes: i32,
}

impl From<Service> for ServiceResponse {
    fn from(s: Service) -> Self {
        Self {
            id: object_id_string(&s.id),
            title: s.title,
            description: s.description,
            price_cents: s.price_cents,
            duration_minutes: s.duration_minutes,
        }
    }
}
