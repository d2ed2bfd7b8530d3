use super::*;

/// Tests that the compiled predicate selects the same rows whether it runs
/// in the database or in-process.
///
/// Expected: pushed-down count equals in-memory match count for each filter
#[tokio::test]
async fn pushdown_agrees_with_in_memory_evaluation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::station::create_station(db).await?;
    let user = factory::user::UserFactory::new(db).build().await?;
    for (i, total) in [50.0, 116.0, 116.0, 300.0, 999.99].into_iter().enumerate() {
        let mut purchase = factory::customer_purchase::CustomerPurchaseFactory::new(db, &user.id)
            .total(total)
            .folio(format!("F-{}", i));
        if i % 2 == 0 {
            purchase = purchase.station_id(&station.id);
        }
        purchase.build().await?;
    }
    let all = CustomerPurchase::find().all(db).await?;

    let station_filter = format!("StationId={}", station.id);
    let not_station_filter = format!("StationId!={}", station.id);
    let filters = [
        "Total=116",
        "Total!=116",
        "Total>116",
        "Total>=116",
        "Total<116",
        "Total<=116",
        "Folio=F-3",
        "Total>=100,Total<500",
        station_filter.as_str(),
        not_station_filter.as_str(),
    ];

    let executor = QueryExecutor::new(db);
    for filter in filters {
        let predicate = compile::<CustomerPurchase>(Some(filter))?;
        let pushed = executor.count_where(&predicate).await?;
        let in_memory = all.iter().filter(|m| predicate.matches(m)).count() as u64;

        assert_eq!(pushed, in_memory, "filter {filter}");
    }

    Ok(())
}

/// Tests listing the purchases of one station through the `/me` scope.
///
/// Expected: Ok with only that station's purchases, newest first
#[tokio::test]
async fn lists_station_purchases_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, employee) = factory::helpers::create_station_with_admin(db).await?;
    let now = Utc::now();
    let older = factory::customer_purchase::CustomerPurchaseFactory::new(db, &employee.id)
        .station_id(&station.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::customer_purchase::CustomerPurchaseFactory::new(db, &employee.id)
        .station_id(&station.id)
        .created_at(now)
        .build()
        .await?;
    factory::customer_purchase::CustomerPurchaseFactory::new(db, &employee.id)
        .build()
        .await?;

    let predicate = Predicate::<CustomerPurchase>::eq("StationId", &station.id)?;
    let repo = CustomerPurchaseRepository::new(db);
    let total = repo.count(&predicate).await?;
    let Listing::Records(purchases) = repo.list(predicate, &ListQuery::default()).await? else {
        panic!("expected typed records without a relation");
    };

    let ids: Vec<_> = purchases.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(total, 2);

    Ok(())
}
