use super::*;

/// Tests saving an item that does not exist yet.
///
/// Verifies that the repository inserts a new row and returns the stored item with
/// every field intact.
///
/// Expected: Ok with item inserted
#[tokio::test]
async fn inserts_new_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bundle_id = Uuid::new_v4();
    let expiry = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap();
    let mut item = FridgeItem::new(bundle_id, "Kimchi", expiry);
    item.quantity = Some(2);
    item.unit_code = Some("JAR".to_string());
    item.memo = Some("room 301".to_string());

    let repo = FridgeItemRepository::new(db);
    let saved = repo.save(item.clone()).await?;

    assert_eq!(saved.id, item.id);
    assert_eq!(saved.bundle_id, bundle_id);
    assert_eq!(saved.name, "Kimchi");
    assert_eq!(saved.expiry_date, expiry);
    assert_eq!(saved.quantity, Some(2));
    assert_eq!(saved.unit_code.as_deref(), Some("JAR"));
    assert_eq!(saved.memo.as_deref(), Some("room 301"));
    assert!(saved.removed_at.is_none());

    let stored = entity::prelude::FridgeItem::find_by_id(item.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests saving an item whose id is already stored.
///
/// Verifies that the stored row is replaced rather than duplicated, that the original
/// `created_at` survives, and that `updated_at` moves forward.
///
/// Expected: Ok with item updated in place
#[tokio::test]
async fn replaces_existing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    let existing = factory::fridge_item::FridgeItemFactory::new(db)
        .name("Milk")
        .created_at(created_at)
        .build()
        .await?;

    let mut item = FridgeItem::from_entity(existing.clone());
    item.name = "Oat milk".to_string();
    item.removed_at = Some(Utc::now());
    // Callers cannot rewrite the creation time.
    item.created_at = Utc::now();

    let repo = FridgeItemRepository::new(db);
    let saved = repo.save(item).await?;

    assert_eq!(saved.id, existing.id);
    assert_eq!(saved.name, "Oat milk");
    assert!(saved.removed_at.is_some());
    assert_eq!(saved.created_at, created_at);
    assert!(saved.updated_at > existing.updated_at);

    let count = entity::prelude::FridgeItem::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests saving an item with every optional field empty.
///
/// Expected: Ok with optional fields stored as None
#[tokio::test]
async fn stores_item_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expiry = (Utc::now() + Duration::days(3)).date_naive();
    let item = FridgeItem::new(Uuid::new_v4(), "Eggs", expiry);

    let repo = FridgeItemRepository::new(db);
    let saved = repo.save(item).await?;

    assert_eq!(saved.quantity, None);
    assert_eq!(saved.unit_code, None);
    assert_eq!(saved.memo, None);

    Ok(())
}
