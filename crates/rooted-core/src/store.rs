//! Storage interfaces for appointments and users
//!
//! The booking and auth services talk to their collections through these
//! traits so the conflict checks can be exercised without a running
//! MongoDB. The stores expose single-record find/insert operations only;
//! there is no insert-if-absent primitive, so callers that need exclusion
//! must do their own read-then-write (and inherit its race).

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use std::sync::Arc;

use crate::db::{collections, MongoDb};
use crate::error::{ApiError, ApiResult};
use crate::models::{Appointment, User};

/// Storage operations for appointment documents
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Find any appointment whose `start_time_iso` equals `slot` exactly
    async fn find_by_slot(&self, slot: &str) -> ApiResult<Option<Appointment>>;

    /// Insert an appointment and return its generated id as a hex string
    async fn insert(&self, appointment: Appointment) -> ApiResult<String>;

    /// List appointments, optionally filtered by `user_id`
    async fn list(&self, user_id: Option<&str>) -> ApiResult<Vec<Appointment>>;
}

/// MongoDB-backed appointment store
pub struct MongoAppointmentStore {
    db: Arc<MongoDb>,
}

impl MongoAppointmentStore {
    pub fn new(db: Arc<MongoDb>) -> Self {
        Self { db }
    }

    fn appointments(&self) -> mongodb::Collection<Appointment> {
        self.db.collection(collections::APPOINTMENTS)
    }
}

#[async_trait]
impl AppointmentStore for MongoAppointmentStore {
    async fn find_by_slot(&self, slot: &str) -> ApiResult<Option<Appointment>> {
        Ok(self
            .appointments()
            .find_one(doc! { "start_time_iso": slot }, None)
            .await?)
    }

    async fn insert(&self, appointment: Appointment) -> ApiResult<String> {
        let result = self.appointments().insert_one(&appointment, None).await?;
        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::Internal("Inserted id was not an ObjectId".to_string()))?;
        Ok(oid.to_hex())
    }

    async fn list(&self, user_id: Option<&str>) -> ApiResult<Vec<Appointment>> {
        let filter = match user_id {
            Some(uid) => doc! { "user_id": uid },
            None => doc! {},
        };
        let cursor = self.appointments().find(filter, None).await?;
        Ok(cursor.try_collect().await?)
    }
}

/// Storage operations for user documents
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find any user registered under `email`
    async fn find_by_email(&self, email: &str) -> ApiResult<Option<User>>;

    /// Find a user by exact email/password match. The comparison is
    /// verbatim; plaintext credentials are part of the contract.
    async fn find_by_credentials(&self, email: &str, password: &str)
        -> ApiResult<Option<User>>;

    /// Insert a user and return the generated id as a hex string
    async fn insert(&self, user: User) -> ApiResult<String>;
}

/// MongoDB-backed user store
pub struct MongoUserStore {
    db: Arc<MongoDb>,
}

impl MongoUserStore {
    pub fn new(db: Arc<MongoDb>) -> Self {
        Self { db }
    }

    fn users(&self) -> mongodb::Collection<User> {
        self.db.collection(collections::USERS)
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_email(&self, email: &str) -> ApiResult<Option<User>> {
        Ok(self
            .users()
            .find_one(doc! { "email": email }, None)
            .await?)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<Option<User>> {
        Ok(self
            .users()
            .find_one(doc! { "email": email, "hashed_password": password }, None)
            .await?)
    }

    async fn insert(&self, user: User) -> ApiResult<String> {
        let result = self.users().insert_one(&user, None).await?;
        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::Internal("Inserted id was not an ObjectId".to_string()))?;
        Ok(oid.to_hex())
    }
}
