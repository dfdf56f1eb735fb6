//! Business logic services

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod orders;

pub use auth::AuthService;
pub use booking::BookingService;
pub use catalog::CatalogService;
pub use orders::OrderService;
