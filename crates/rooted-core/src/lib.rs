//! Rooted Core - booking and commerce domain for the Rooted in Speech backend
//!
//! This crate provides the domain layer shared by the server binary:
//! - MongoDB connection and collection management
//! - Persisted document models and their API response shapes
//! - Appointment booking with the slot conflict check
//! - User registration/login, service catalog and order recording

pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use db::MongoDb;
pub use error::{ApiError, ApiResult};
