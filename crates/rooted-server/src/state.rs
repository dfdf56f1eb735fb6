//! Application state

use rooted_core::MongoDb;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// MongoDB connection
    pub db: Arc<MongoDb>,
}
