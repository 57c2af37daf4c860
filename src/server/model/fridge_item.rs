//! Domain model for items stored in the shared fridge.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// An item registered in a fridge bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct FridgeItem {
    /// Unique identifier for the item.
    pub id: Uuid,
    /// Bundle the item was registered with.
    pub bundle_id: Uuid,
    /// Display name of the item.
    pub name: String,
    /// Date the item expires.
    pub expiry_date: NaiveDate,
    /// Optional amount of the item.
    pub quantity: Option<i32>,
    /// Optional unit the quantity is measured in.
    pub unit_code: Option<String>,
    /// Optional free-form note.
    pub memo: Option<String>,
    /// Timestamp when the item was first stored.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update.
    pub updated_at: DateTime<Utc>,
    /// Timestamp when the item was taken out, if it was.
    pub removed_at: Option<DateTime<Utc>>,
}

impl FridgeItem {
    /// Creates a new item with a random id and both timestamps set to now.
    pub fn new(bundle_id: Uuid, name: impl Into<String>, expiry_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            bundle_id,
            name: name.into(),
            expiry_date,
            quantity: None,
            unit_code: None,
            memo: None,
            created_at: now,
            updated_at: now,
            removed_at: None,
        }
    }

    /// Converts an entity model to a fridge item domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `FridgeItem` - The converted fridge item domain model
    pub fn from_entity(entity: entity::fridge_item::Model) -> Self {
        Self {
            id: entity.id,
            bundle_id: entity.bundle_id,
            name: entity.name,
            expiry_date: entity.expiry_date,
            quantity: entity.quantity,
            unit_code: entity.unit_code,
            memo: entity.memo,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            removed_at: entity.removed_at,
        }
    }
}
