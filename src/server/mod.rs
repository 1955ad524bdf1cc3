//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the blogging API,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, record scoping, and search filtering
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the permission evaluator
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, application URL)
//! - **Startup** (`startup`) - Initialization of database and sessions
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - Limit/offset pagination
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the acting user from the session and evaluates permissions
//! 3. **Controller** resolves the target record, converts DTOs to params, calls service
//! 4. **Service** validates references, executes business rules, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, applies pagination, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
