//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary, keeping
//! SeaORM types out of the rest of the application.

pub mod fridge_item;
