//! HTTP route handlers

pub mod appointments;
pub mod auth;
pub mod orders;
pub mod services;
