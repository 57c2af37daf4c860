//! Fridge item factory for creating test fridge item entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test fridge items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::fridge_item::FridgeItemFactory;
///
/// let item = FridgeItemFactory::new(&db)
///     .name("Kimchi")
///     .memo(Some("spicy".to_string()))
///     .build()
///     .await?;
/// ```
pub struct FridgeItemFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    bundle_id: Uuid,
    name: String,
    expiry_date: NaiveDate,
    quantity: Option<i32>,
    unit_code: Option<String>,
    memo: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> FridgeItemFactory<'a> {
    /// Creates a new FridgeItemFactory with default values.
    ///
    /// Defaults:
    /// - id / bundle_id: random v4 UUIDs
    /// - name: `"Item {n}"` where n is auto-incremented
    /// - expiry_date: one week from today
    /// - quantity: `Some(1)`
    /// - unit_code / memo: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            bundle_id: Uuid::new_v4(),
            name: format!("Item {}", n),
            expiry_date: (Utc::now() + Duration::days(7)).date_naive(),
            quantity: Some(1),
            unit_code: None,
            memo: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn bundle_id(mut self, bundle_id: Uuid) -> Self {
        self.bundle_id = bundle_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn expiry_date(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = expiry_date;
        self
    }

    pub fn quantity(mut self, quantity: Option<i32>) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn unit_code(mut self, unit_code: Option<String>) -> Self {
        self.unit_code = unit_code;
        self
    }

    pub fn memo(mut self, memo: Option<String>) -> Self {
        self.memo = memo;
        self
    }

    /// Sets the creation timestamp; `updated_at` is stored with the same value.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the fridge item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::fridge_item::Model)` - Created fridge item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::fridge_item::Model, DbErr> {
        entity::fridge_item::ActiveModel {
            id: ActiveValue::Set(self.id),
            bundle_id: ActiveValue::Set(self.bundle_id),
            name: ActiveValue::Set(self.name),
            expiry_date: ActiveValue::Set(self.expiry_date),
            quantity: ActiveValue::Set(self.quantity),
            unit_code: ActiveValue::Set(self.unit_code),
            memo: ActiveValue::Set(self.memo),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            removed_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fridge item with default values.
///
/// Shorthand for `FridgeItemFactory::new(db).build().await`.
pub async fn create_fridge_item(
    db: &DatabaseConnection,
) -> Result<entity::fridge_item::Model, DbErr> {
    FridgeItemFactory::new(db).build().await
}
