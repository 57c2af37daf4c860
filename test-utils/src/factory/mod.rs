//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let item = factory::create_fridge_item(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let item = factory::fridge_item::FridgeItemFactory::new(&db)
//!     .name("Milk")
//!     .quantity(Some(2))
//!     .build()
//!     .await?;
//! ```

pub mod fridge_item;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use fridge_item::create_fridge_item;
