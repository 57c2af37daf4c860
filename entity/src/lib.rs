//! SeaORM entities for the dormmate database schema.

pub mod prelude;

pub mod fridge_item;
