use super::*;

/// Tests listing every stored item.
///
/// Verifies that items come back ordered by creation time regardless of insert order.
///
/// Expected: Ok with items oldest first
#[tokio::test]
async fn returns_items_ordered_by_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let newest = factory::fridge_item::FridgeItemFactory::new(db)
        .name("Newest")
        .created_at(base + Duration::hours(2))
        .build()
        .await?;
    let oldest = factory::fridge_item::FridgeItemFactory::new(db)
        .name("Oldest")
        .created_at(base)
        .build()
        .await?;
    let middle = factory::fridge_item::FridgeItemFactory::new(db)
        .name("Middle")
        .created_at(base + Duration::hours(1))
        .build()
        .await?;

    let repo = FridgeItemRepository::new(db);
    let items = repo.find_all().await?;

    let ids: Vec<Uuid> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![oldest.id, middle.id, newest.id]);

    Ok(())
}

/// Tests listing when nothing is stored.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_when_no_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FridgeItemRepository::new(db);
    let items = repo.find_all().await?;

    assert!(items.is_empty());

    Ok(())
}
