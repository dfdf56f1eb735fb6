//! Order model

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::common::{bson_datetime_option, object_id_string};

/// Order line item (embedded document)
///
/// `service_title` is denormalized from the service document, matching the
/// appointment model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub service_id: String,
    pub service_title: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub price_cents: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Order document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub amount_cents: i64,
    #[serde(default = "default_status")]
    pub status: String, // pending | paid | canceled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_payment_intent: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "bson_datetime_option"
    )]
    pub paid_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Request to create a checkout
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub user_id: String,
    pub items: Vec<OrderItem>,
}

/// Order response (for API)
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub amount_cents: i64,
    pub status: String,
    pub stripe_session_id: Option<String>,
    pub stripe_payment_intent: Option<String>,
    /// Rendered as an RFC 3339 string when present
    pub paid_at: Option<DateTime<Utc>>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: object_id_string(&o.id),
            user_id: o.user_id,
            items: o.items,
            amount_cents: o.amount_cents,
            status: o.status,
            stripe_session_id: o.stripe_session_id,
            stripe_payment_intent: o.stripe_payment_intent,
            paid_at: o.paid_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_defaults() {
        let doc = bson::doc! {
            "user_id": "u1",
            "items": [
                { "service_id": "s1", "service_title": "Therapy Session", "price_cents": 9000_i64 },
            ],
            "amount_cents": 9000_i64,
        };
        let order: Order = bson::from_document(doc).unwrap();
        assert_eq!(order.status, "pending");
        assert_eq!(order.items[0].quantity, 1);
        assert!(order.paid_at.is_none());
        assert!(order.stripe_session_id.is_none());
    }

    #[test]
    fn test_paid_at_roundtrips_as_bson_datetime() {
        let paid_at = Utc::now();
        let order = Order {
            id: None,
            user_id: "u1".to_string(),
            items: vec![],
            amount_cents: 0,
            status: "paid".to_string(),
            stripe_session_id: None,
            stripe_payment_intent: None,
            paid_at: Some(paid_at),
        };
        let doc = bson::to_document(&order).unwrap();
        assert!(matches!(
            doc.get("paid_at"),
            Some(bson::Bson::DateTime(_))
        ));
        let back: Order = bson::from_document(doc).unwrap();
        // BSON datetimes carry millisecond precision
        assert_eq!(
            back.paid_at.unwrap().timestamp_millis(),
            paid_at.timestamp_millis()
        );
    }
}
