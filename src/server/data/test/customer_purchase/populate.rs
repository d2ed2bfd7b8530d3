use super::*;

/// Tests that populating the one-to-one station relation drops purchases
/// recorded without a station.
///
/// Expected: Ok with the two stationed purchases, each embedding its station
#[tokio::test]
async fn drops_purchases_without_station() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, employee) = factory::helpers::create_station_with_admin(db).await?;
    let now = Utc::now();
    let mut stationed = Vec::new();
    for minutes in [3, 2] {
        let purchase = factory::customer_purchase::CustomerPurchaseFactory::new(db, &employee.id)
            .station_id(&station.id)
            .created_at(now - Duration::minutes(minutes))
            .build()
            .await?;
        stationed.push(purchase.id);
    }
    factory::customer_purchase::CustomerPurchaseFactory::new(db, &employee.id)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;

    let query = ListQuery {
        relation: Some("stations".to_string()),
        sort: Some("createdAt".to_string()),
        ..ListQuery::default()
    };
    let Listing::Populated(documents) = CustomerPurchaseRepository::new(db)
        .list(Predicate::always(), &query)
        .await?
    else {
        panic!("expected documents with a relation");
    };

    let ids: Vec<_> = documents
        .iter()
        .map(|d| d["id"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, stationed);
    for document in &documents {
        assert_eq!(
            document["StationsEmbedded"]["id"],
            Value::String(station.id.clone())
        );
    }

    Ok(())
}

/// Tests that the relation hint does not change the count.
///
/// Expected: count with and without `relation=stations` is the same, and
/// includes the purchase the populated listing drops
#[tokio::test]
async fn count_ignores_relation_hint() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, employee) = factory::helpers::create_station_with_admin(db).await?;
    factory::customer_purchase::CustomerPurchaseFactory::new(db, &employee.id)
        .station_id(&station.id)
        .build()
        .await?;
    factory::customer_purchase::CustomerPurchaseFactory::new(db, &employee.id)
        .build()
        .await?;

    let plain = ListQuery::default();
    let populated = ListQuery {
        relation: Some("stations".to_string()),
        ..ListQuery::default()
    };
    let executor = QueryExecutor::new(db);

    assert_eq!(executor.count::<CustomerPurchase>(&plain).await?, 2);
    assert_eq!(executor.count::<CustomerPurchase>(&populated).await?, 2);

    Ok(())
}

/// Tests populating the recording user, sorted by a field of the embedded
/// document.
///
/// Expected: Ok with purchases ordered by the embedded user's first name
#[tokio::test]
async fn sorts_by_embedded_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zoe = factory::user::UserFactory::new(db).first_name("Zoe").build().await?;
    let abel = factory::user::UserFactory::new(db).first_name("Abel").build().await?;
    factory::customer_purchase::CustomerPurchaseFactory::new(db, &zoe.id)
        .build()
        .await?;
    factory::customer_purchase::CustomerPurchaseFactory::new(db, &abel.id)
        .build()
        .await?;

    let query = ListQuery {
        relation: Some("Users".to_string()),
        sort: Some("UsersEmbedded.firstName".to_string()),
        ..ListQuery::default()
    };
    let Listing::Populated(documents) = CustomerPurchaseRepository::new(db)
        .list(Predicate::always(), &query)
        .await?
    else {
        panic!("expected documents with a relation");
    };

    let names: Vec<_> = documents
        .iter()
        .map(|d| d["UsersEmbedded"]["firstName"].clone())
        .collect();
    assert_eq!(names, vec![Value::from("Abel"), Value::from("Zoe")]);

    Ok(())
}
