//! Server-side API backend.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, request validation, error translation, and data access.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers
//! - **Extractors** (`extract`) - Request parsing that rejects with application errors
//! - **Validation** (`validation/`) - Explicit validation rules per request shape
//! - **Data Layer** (`data/`) - Storage interface and its SeaORM implementation
//! - **Model Layer** (`model/`) - Domain models converted from entities
//! - **Error Layer** (`error/`) - Application error type and problem document translation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Logging, database connection and shutdown signal
//! - **Router** (`router`) - Axum route configuration, middleware and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the handler, or to a fallback
//! 2. **Extractors** parse and validate the request, rejecting with `AppError`
//! 3. **Controller** performs the operation and returns `Result<_, AppError>`
//! 4. **Error Layer** turns any `AppError` into an `application/problem+json` response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
