use super::*;

/// Tests deleting a stored item.
///
/// Verifies that only the targeted row is removed.
///
/// Expected: Ok with item deleted
#[tokio::test]
async fn deletes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_fridge_item(db).await?;
    let other = factory::create_fridge_item(db).await?;

    let repo = FridgeItemRepository::new(db);
    let result = repo.delete_by_id(item.id).await;

    assert!(result.is_ok());

    let check = entity::prelude::FridgeItem::find_by_id(item.id).one(db).await?;
    assert!(check.is_none());
    let check = entity::prelude::FridgeItem::find_by_id(other.id)
        .one(db)
        .await?;
    assert!(check.is_some());

    Ok(())
}

/// Tests deleting an id that was never stored.
///
/// Expected: Ok with nothing removed
#[tokio::test]
async fn succeeds_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_fridge_item(db).await?;

    let repo = FridgeItemRepository::new(db);
    let result = repo.delete_by_id(Uuid::new_v4()).await;

    assert!(result.is_ok());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
