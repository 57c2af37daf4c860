//! Dormmate backend.
//!
//! A small axum + SeaORM service exposing debug endpoints that exercise the global
//! problem-details error translator, plus the fridge item persistence layer.

pub mod model;
pub mod server;
