//! Order recording and checkout stub

use futures::TryStreamExt;
use mongodb::bson::doc;
use serde::Serialize;
use std::sync::Arc;

use crate::db::{collections, MongoDb};
use crate::error::{ApiError, ApiResult};
use crate::models::{CheckoutRequest, Order, OrderItem, OrderResponse};

/// Checkout result returned to the client
///
/// `stripe_checkout_url` is always null for now; the order is recorded with
/// a pending status and real payment integration would fill in the session
/// URL. Payment processing is an explicit non-goal.
#[derive(Debug, Serialize)]
pub struct CheckoutOutcome {
    pub order_id: String,
    pub amount_cents: i64,
    pub stripe_checkout_url: Option<String>,
}

/// Order service
pub struct OrderService {
    db: Arc<MongoDb>,
}

impl OrderService {
    pub fn new(db: Arc<MongoDb>) -> Self {
        Self { db }
    }

    fn orders(&self) -> mongodb::Collection<Order> {
        self.db.collection(collections::ORDERS)
    }

    /// Record a pending order for the requested items
    pub async fn checkout(&self, request: CheckoutRequest) -> ApiResult<CheckoutOutcome> {
        let amount_cents = order_amount_cents(&request.items);

        let order = Order {
            id: None,
            user_id: request.user_id,
            items: request.items,
            amount_cents,
            status: "pending".to_string(),
            stripe_session_id: None,
            stripe_payment_intent: None,
            paid_at: None,
        };

        let result = self.orders().insert_one(&order, None).await?;
        let order_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::Internal("Inserted id was not an ObjectId".to_string()))?
            .to_hex();
        tracing::info!(order_id = %order_id, amount_cents, "Order recorded");

        Ok(CheckoutOutcome {
            order_id,
            amount_cents,
            stripe_checkout_url: None,
        })
    }

    /// List orders for a user
    pub async fn list_for_user(&self, user_id: &str) -> ApiResult<Vec<OrderResponse>> {
        let cursor = self.orders().find(doc! { "user_id": user_id }, None).await?;
        let orders: Vec<Order> = cursor.try_collect().await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }
}

/// Total order amount: sum of price * quantity over the items
fn order_amount_cents(items: &[OrderItem]) -> i64 {
    items
        .iter()
        .map(|item| item.price_cents * item.quantity)
        .sum()
}
