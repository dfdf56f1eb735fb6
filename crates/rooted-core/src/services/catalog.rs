//! Service catalog listing and seeding

use futures::TryStreamExt;
use mongodb::bson::doc;
use serde::Serialize;
use std::sync::Arc;

use crate::db::{collections, MongoDb};
use crate::error::ApiResult;
use crate::models::{Service, ServiceResponse};

/// Outcome of a seeding request
#[derive(Debug, Serialize)]
pub struct SeedOutcome {
    pub seeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Catalog service
pub struct CatalogService {
    db: Arc<MongoDb>,
}

impl CatalogService {
    pub fn new(db: Arc<MongoDb>) -> Self {
        Self { db }
    }

    fn services(&self) -> mongodb::Collection<Service> {
        self.db.collection(collections::SERVICES)
    }

    /// List all services
    pub async fn list(&self) -> ApiResult<Vec<ServiceResponse>> {
        let cursor = self.services().find(doc! {}, None).await?;
        let services: Vec<Service> = cursor.try_collect().await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    /// Seed the default services when the collection is empty
    pub async fn seed_defaults(&self) -> ApiResult<SeedOutcome> {
        let count = self.services().count_documents(doc! {}, None).await?;
        if count > 0 {
            return Ok(SeedOutcome {
                seeded: false,
                count: None,
            });
        }

        let defaults = default_services();
        let count = defaults.len();
        self.services().insert_many(&defaults, None).await?;
        tracing::info!(count, "Seeded default services");

        Ok(SeedOutcome {
            seeded: true,
            count: Some(count),
        })
    }
}

fn default_services() -> Vec<Service> {
    vec![
        Service {
            id: None,
            title: "Behavior Consultation".to_string(),
            description: Some("Initial consultation".to_string()),
            price_cents: 15000,
            duration_minutes: 60,
        },
        Service {
            id: None,
            title: "Therapy Session".to_string(),
            description: Some("Follow-up therapy".to_string()),
            price_cents: 9000,
            duration_minutes: 45,
        },
    ]
}
