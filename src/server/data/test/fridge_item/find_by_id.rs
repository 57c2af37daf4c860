use super::*;

/// Tests finding a stored item by id.
///
/// Expected: Ok(Some) with the matching item
#[tokio::test]
async fn finds_existing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_fridge_item(db).await?;

    let repo = FridgeItemRepository::new(db);
    let result = repo.find_by_id(item.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found, FridgeItem::from_entity(item));

    Ok(())
}

/// Tests finding an id that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_fridge_item(db).await?;

    let repo = FridgeItemRepository::new(db);
    let result = repo.find_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a missing table surfaces as a storage error.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_table_is_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FridgeItemRepository::new(db);
    let result = repo.find_by_id(Uuid::new_v4()).await;

    assert!(result.is_err());

    Ok(())
}
