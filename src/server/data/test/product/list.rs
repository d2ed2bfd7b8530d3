use super::*;

/// Tests a filter made of two comma-separated tokens.
///
/// Expected: Ok with products priced `>= 20`; the `Price < 30` token is ignored
#[tokio::test]
async fn filters_on_first_token_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for price in [10.0, 20.0, 25.5, 30.0] {
        factory::product::ProductFactory::new(db)
            .price(price)
            .build()
            .await?;
    }

    let query = ListQuery {
        filter: Some("Price >= 20, Price < 30".to_string()),
        sort: Some("price".to_string()),
        ..ListQuery::default()
    };
    let repo = ProductRepository::new(db);
    let Listing::Records(products) = repo.list(&query).await? else {
        panic!("expected typed records without a relation");
    };

    let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![20.0, 25.5, 30.0]);
    assert_eq!(repo.count(&query).await?, 3);

    Ok(())
}

/// Tests that a filter on a field the collection does not declare fails
/// before reaching the database.
///
/// Expected: Err(QueryError::UnknownField)
#[tokio::test]
async fn rejects_unknown_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let query = ListQuery {
        filter: Some("price=10".to_string()),
        ..ListQuery::default()
    };
    let result = ProductRepository::new(db).list(&query).await;

    assert!(matches!(result, Err(QueryError::UnknownField { .. })));

    Ok(())
}

/// Tests that a non-numeric value for a number field is rejected.
///
/// Expected: Err(QueryError::InvalidFilterValue)
#[tokio::test]
async fn rejects_non_numeric_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let query = ListQuery {
        filter: Some("Price>cheap".to_string()),
        ..ListQuery::default()
    };
    let result = ProductRepository::new(db).count(&query).await;

    assert!(matches!(result, Err(QueryError::InvalidFilterValue { .. })));

    Ok(())
}

/// Tests sorting on a name that is not a column.
///
/// Expected: Err(QueryError::Store)
#[tokio::test]
async fn unknown_sort_field_is_a_store_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let query = ListQuery {
        sort: Some("-popularity".to_string()),
        ..ListQuery::default()
    };
    let result = ProductRepository::new(db).list(&query).await;

    assert!(matches!(result, Err(QueryError::Store(_))));

    Ok(())
}

/// Tests that products have nothing to populate.
///
/// Expected: Err(QueryError::UnknownRelation)
#[tokio::test]
async fn has_no_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let query = ListQuery {
        relation: Some("stations".to_string()),
        ..ListQuery::default()
    };
    let result = ProductRepository::new(db).list(&query).await;

    assert!(matches!(result, Err(QueryError::UnknownRelation { .. })));

    Ok(())
}
