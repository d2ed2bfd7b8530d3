use super::*;

/// Tests creating, patching and deleting a product.
///
/// Expected: Ok with only the public price changed by the patch
#[tokio::test]
async fn creates_updates_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParam {
            name: "Magna".to_string(),
            description: "Regular gasoline".to_string(),
            price: 20.0,
            price_public: 23.2,
        })
        .await?;

    let patched = repo
        .update(
            &product.id,
            UpdateProductParam {
                price_public: Some(23.9),
                ..UpdateProductParam::default()
            },
        )
        .await?
        .expect("product exists");

    assert_eq!(patched.price, 20.0);
    assert_eq!(patched.price_public, 23.9);
    assert!(patched.updated_at >= product.updated_at);

    assert!(repo.delete(&product.id).await?);
    assert!(repo.find_by_id(&product.id).await?.is_none());

    Ok(())
}
