//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed
//! by the request handlers. The state is initialized once during startup and then
//! cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Application base URL for generating links.
    ///
    /// Used to build absolute `next`/`previous` links in paginated responses.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `app_url` - Application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, app_url: String) -> Self {
        Self { db, app_url }
    }
}
