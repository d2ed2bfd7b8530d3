use super::*;
use serde_json::Value;

/// Tests that listing without a sort returns the newest stations first.
///
/// Expected: Ok with stations ordered by createdAt descending
#[tokio::test]
async fn lists_newest_first_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::station::StationFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::station::StationFactory::new(db)
        .created_at(now)
        .build()
        .await?;

    let listing = StationRepository::new(db).list(&ListQuery::default()).await?;

    let Listing::Records(stations) = listing else {
        panic!("expected typed records without a relation");
    };
    let ids: Vec<_> = stations.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests filtering, ascending sort and paging together.
///
/// Five stations, two inactive. Filtering on `Active=true` sorted by name
/// ascending with a page size of two returns the second page with one row.
///
/// Expected: Ok with the last active station by name
#[tokio::test]
async fn filters_sorts_and_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, active) in [("Alamo", true), ("Bravo", false), ("Cedro", true), ("Delta", false), ("Encino", true)] {
        factory::station::StationFactory::new(db)
            .name(name)
            .active(active)
            .build()
            .await?;
    }

    let query = ListQuery {
        sort: Some("name".to_string()),
        page_size: 2,
        page: 1,
        filter: Some("Active=true".to_string()),
        ..ListQuery::default()
    };
    let repo = StationRepository::new(db);
    let listing = repo.list(&query).await?;
    let total = repo.count(&query).await?;

    let Listing::Records(stations) = listing else {
        panic!("expected typed records without a relation");
    };
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "Encino");
    assert_eq!(total, 3);

    let paginator = query.paginator(total);
    assert_eq!(paginator.page, 2);
    assert_eq!(paginator.remaining_documents, 0);

    Ok(())
}

/// Tests populating a one-to-many relation.
///
/// Verifies that each station embeds an array of its users under
/// `UsersEmbedded`, including an empty array for a station with none.
///
/// Expected: Ok with both stations and their users embedded
#[tokio::test]
async fn populates_users_of_each_station() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let staffed = factory::station::StationFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    let empty = factory::station::StationFactory::new(db)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    for _ in 0..2 {
        factory::user::UserFactory::new(db)
            .station_id(&staffed.id)
            .build()
            .await?;
    }

    let query = ListQuery {
        relation: Some("users".to_string()),
        ..ListQuery::default()
    };
    let listing = StationRepository::new(db).list(&query).await?;

    let Listing::Populated(documents) = listing else {
        panic!("expected documents with a relation");
    };
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["id"], Value::String(staffed.id.clone()));
    assert_eq!(documents[0]["UsersEmbedded"].as_array().map(Vec::len), Some(2));
    assert_eq!(documents[1]["id"], Value::String(empty.id));
    assert_eq!(documents[1]["UsersEmbedded"], Value::Array(vec![]));

    Ok(())
}

/// Tests that an undeclared relation is rejected.
///
/// Expected: Err with UnknownRelation
#[tokio::test]
async fn rejects_unknown_relation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let query = ListQuery {
        relation: Some("products".to_string()),
        ..ListQuery::default()
    };
    let result = StationRepository::new(db).list(&query).await;

    assert!(matches!(
        result,
        Err(crate::server::error::query::QueryError::UnknownRelation { .. })
    ));

    Ok(())
}
