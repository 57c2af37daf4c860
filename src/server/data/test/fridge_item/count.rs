use super::*;

/// Tests counting stored items across saves and deletes.
///
/// Expected: Ok with count tracking the stored rows
#[tokio::test]
async fn counts_stored_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FridgeItemRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    let first = factory::create_fridge_item(db).await?;
    factory::create_fridge_item(db).await?;
    assert_eq!(repo.count().await?, 2);

    // Saving an existing id does not add a row.
    repo.save(FridgeItem::from_entity(first.clone())).await?;
    assert_eq!(repo.count().await?, 2);

    repo.delete_by_id(first.id).await?;
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
