use super::*;

/// Tests finding a product through the `Id` field of its collection.
///
/// Expected: Ok(Some) for the stored id, Ok(None) for an unknown UUID
#[tokio::test]
async fn finds_product_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .name("Magna")
        .build()
        .await?;
    factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let found = repo.find_by_id(&product.id).await?.expect("product exists");
    let missing = repo
        .find_by_id("4f1c7a2e-5b0d-4c8e-9a3f-2d6b8e1f0a7c")
        .await?;

    assert_eq!(found.id, product.id);
    assert_eq!(found.name, "Magna");
    assert!(missing.is_none());

    Ok(())
}

/// Tests that an id which is not a UUID is treated as absent.
///
/// Expected: Ok(None) rather than a filter error
#[tokio::test]
async fn non_uuid_id_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::create_product(db).await?;

    let result = ProductRepository::new(db).find_by_id("not-an-id").await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
