//! User registration and login
//!
//! Passwords are stored and compared verbatim. This mirrors the deployed
//! behavior and is an explicit non-goal of the backend; do not treat the
//! `hashed_password` field name as evidence of hashing.

use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, RegisterRequest, User, UserResponse};
use crate::store::UserStore;

/// Authentication service
pub struct AuthService {
    store: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a new user
    ///
    /// Same read-then-write shape as the booking conflict check: an
    /// existence lookup on email followed by an insert, with no uniqueness
    /// constraint backing it.
    pub async fn register(&self, request: RegisterRequest) -> ApiResult<UserResponse> {
        let existing = self.store.find_by_email(&request.email).await?;
        if existing.is_some() {
            return Err(ApiError::EmailTaken);
        }

        let user = User {
            id: None,
            name: request.name,
            email: request.email,
            hashed_password: request.password,
            is_active: true,
        };

        let name = user.name.clone();
        let email = user.email.clone();
        let id = self.store.insert(user).await?;
        tracing::info!(email = %email, "User registered");

        Ok(UserResponse { id, name, email })
    }

    /// Log in by exact email/password match
    pub async fn login(&self, request: LoginRequest) -> ApiResult<UserResponse> {
        let user = self
            .store
            .find_by_credentials(&request.email, &request.password)
            .await?;

        match user {
            Some(user) => Ok(UserResponse::from(user)),
            None => Err(ApiError::InvalidCredentials),
        }
    }
}
