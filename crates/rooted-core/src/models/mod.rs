//! Persisted MongoDB document models and their API response shapes

pub mod appointment;
pub mod common;
pub mod order;
pub mod service;
pub mod user;

pub use appointment::{Appointment, AppointmentResponse, BookAppointmentRequest};
pub use order::{CheckoutRequest, Order, OrderItem, OrderResponse};
pub use service::{Service, ServiceResponse};
pub use user::{LoginRequest, RegisterRequest, User, UserResponse};
