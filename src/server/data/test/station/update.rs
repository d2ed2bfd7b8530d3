use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change and that `updated_at` moves
/// forward while `created_at` stays put.
///
/// Expected: Ok with name changed and key untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now() - Duration::days(1);
    let station = factory::station::StationFactory::new(db)
        .created_at(created_at)
        .build()
        .await?;

    let param = UpdateStationParam {
        name: Some("Renamed".to_string()),
        ..UpdateStationParam::default()
    };
    let updated = StationRepository::new(db)
        .update(&station.id, param)
        .await?
        .expect("station exists");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.station_key, station.station_key);
    assert_eq!(updated.created_at, station.created_at);
    assert!(updated.updated_at > station.updated_at);

    Ok(())
}

/// Tests updating a station that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = StationRepository::new(db)
        .update(&uuid::Uuid::new_v4().to_string(), UpdateStationParam::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests deleting a station by id, then deleting it again.
///
/// Expected: true on first delete, false on the second
#[tokio::test]
async fn deletes_station_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::station::create_station(db).await?;
    let repo = StationRepository::new(db);

    assert!(repo.delete(&station.id).await?);
    assert!(!repo.delete(&station.id).await?);
    assert!(repo.find_by_id(&station.id).await?.is_none());

    Ok(())
}
