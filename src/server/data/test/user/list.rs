use super::*;
use serde_json::Value;

/// Tests that a station clause ANDed onto the client filter scopes results.
///
/// Expected: Ok with only the employees of the given station
#[tokio::test]
async fn scopes_by_station() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, admin) = factory::helpers::create_station_with_admin(db).await?;
    let employee = factory::user::UserFactory::new(db)
        .station_id(&station.id)
        .build()
        .await?;
    let other = factory::station::create_station(db).await?;
    factory::user::UserFactory::new(db)
        .station_id(&other.id)
        .build()
        .await?;

    let query = ListQuery {
        filter: Some("Role=Employee".to_string()),
        ..ListQuery::default()
    };
    let predicate = compile::<entity::user::Entity>(query.filter.as_deref())?
        .and(Predicate::eq("StationId", &station.id)?);

    let repo = UserRepository::new(db);
    let total = repo.count(&predicate).await?;
    let Listing::Records(users) = repo.list(predicate, &query).await? else {
        panic!("expected typed records without a relation");
    };

    assert_eq!(total, 1);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, employee.id);
    assert_ne!(users[0].id, admin.id);

    Ok(())
}

/// Tests populating each user's station.
///
/// Users without a station are dropped since the relation is one-to-one.
///
/// Expected: Ok with the assigned user only, station embedded as an object
#[tokio::test]
async fn populates_station() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, admin) = factory::helpers::create_station_with_admin(db).await?;
    factory::user::UserFactory::new(db).role("SuperAdmin").build().await?;

    let query = ListQuery {
        relation: Some("stations".to_string()),
        ..ListQuery::default()
    };
    let Listing::Populated(documents) = UserRepository::new(db)
        .list(Predicate::always(), &query)
        .await?
    else {
        panic!("expected documents with a relation");
    };

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["id"], Value::String(admin.id));
    assert_eq!(
        documents[0]["StationsEmbedded"]["id"],
        Value::String(station.id)
    );
    assert!(documents[0].get("password").is_none());

    Ok(())
}
