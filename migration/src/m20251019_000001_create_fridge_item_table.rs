use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FridgeItem::Table)
                    .if_not_exists()
                    .col(pk_uuid(FridgeItem::Id))
                    .col(uuid(FridgeItem::BundleId))
                    .col(string(FridgeItem::Name))
                    .col(date(FridgeItem::ExpiryDate))
                    .col(integer_null(FridgeItem::Quantity))
                    .col(string_null(FridgeItem::UnitCode))
                    .col(text_null(FridgeItem::Memo))
                    .col(
                        timestamp_with_time_zone(FridgeItem::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(FridgeItem::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(FridgeItem::RemovedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fridge_item_bundle_id")
                    .table(FridgeItem::Table)
                    .col(FridgeItem::BundleId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FridgeItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FridgeItem {
    Table,
    Id,
    BundleId,
    Name,
    ExpiryDate,
    Quantity,
    UnitCode,
    Memo,
    CreatedAt,
    UpdatedAt,
    RemovedAt,
}
