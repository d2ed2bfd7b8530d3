use super::*;

/// Tests filtering payment methods on their boolean status.
///
/// Expected: Ok with only enabled methods
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PaymentMethod)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let enabled = factory::payment_method::PaymentMethodFactory::new(db)
        .status(true)
        .build()
        .await?;
    factory::payment_method::PaymentMethodFactory::new(db)
        .status(false)
        .build()
        .await?;

    let query = ListQuery {
        filter: Some("Status=TRUE".to_string()),
        ..ListQuery::default()
    };
    let Listing::Records(methods) = PaymentMethodRepository::new(db).list(&query).await? else {
        panic!("expected typed records without a relation");
    };

    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].id, enabled.id);

    Ok(())
}

/// Tests that `!=` also matches rows whose value differs by key.
///
/// Expected: Ok with every method except the excluded key
#[tokio::test]
async fn excludes_key_with_not_equal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PaymentMethod)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for key in ["01", "03", "04"] {
        factory::payment_method::PaymentMethodFactory::new(db)
            .key(key)
            .build()
            .await?;
    }

    let query = ListQuery {
        filter: Some("Key!=03".to_string()),
        sort: Some("key".to_string()),
        ..ListQuery::default()
    };
    let Listing::Records(methods) = PaymentMethodRepository::new(db).list(&query).await? else {
        panic!("expected typed records without a relation");
    };

    let keys: Vec<_> = methods.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(keys, vec!["01", "04"]);

    Ok(())
}
