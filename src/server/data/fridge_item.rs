use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::{data::Repository, model::fridge_item::FridgeItem};

pub struct FridgeItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FridgeItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Repository<FridgeItem> for FridgeItemRepository<'_> {
    type Id = Uuid;
    type Error = DbErr;

    /// Creates or updates a fridge item keyed by its id.
    ///
    /// On update the stored `created_at` is kept and `updated_at` is set to now; on insert
    /// both timestamps are stored as given.
    async fn save(&self, item: FridgeItem) -> Result<FridgeItem, DbErr> {
        let existing = entity::prelude::FridgeItem::find_by_id(item.id)
            .one(self.db)
            .await?;

        let (created_at, updated_at) = match &existing {
            Some(stored) => (stored.created_at, Utc::now()),
            None => (item.created_at, item.updated_at),
        };

        let model = entity::fridge_item::ActiveModel {
            id: ActiveValue::Set(item.id),
            bundle_id: ActiveValue::Set(item.bundle_id),
            name: ActiveValue::Set(item.name),
            expiry_date: ActiveValue::Set(item.expiry_date),
            quantity: ActiveValue::Set(item.quantity),
            unit_code: ActiveValue::Set(item.unit_code),
            memo: ActiveValue::Set(item.memo),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(updated_at),
            removed_at: ActiveValue::Set(item.removed_at),
        };

        let stored = if existing.is_some() {
            model.update(self.db).await?
        } else {
            model.insert(self.db).await?
        };

        Ok(FridgeItem::from_entity(stored))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FridgeItem>, DbErr> {
        let item = entity::prelude::FridgeItem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(item.map(FridgeItem::from_entity))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::FridgeItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Returns every fridge item ordered by creation time, then id.
    async fn find_all(&self) -> Result<Vec<FridgeItem>, DbErr> {
        let items = entity::prelude::FridgeItem::find()
            .order_by_asc(entity::fridge_item::Column::CreatedAt)
            .order_by_asc(entity::fridge_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(FridgeItem::from_entity).collect())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::FridgeItem::find().count(self.db).await
    }
}
