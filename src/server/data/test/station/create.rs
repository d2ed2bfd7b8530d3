use super::*;

fn param(station_key: &str) -> CreateStationParam {
    CreateStationParam {
        name: "Gasolinera Centro".to_string(),
        email: "centro@example.com".to_string(),
        station_key: station_key.to_string(),
        active: true,
        street: Some("Av. Juarez".to_string()),
        outside: None,
        zip_code: Some("64000".to_string()),
        state: "Nuevo Leon".to_string(),
        municipality: "Monterrey".to_string(),
    }
}

/// Tests creating a station.
///
/// Verifies that the repository assigns a UUID and sets both timestamps to
/// the same instant.
///
/// Expected: Ok with station created
#[tokio::test]
async fn creates_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = StationRepository::new(db).create(param("E-001")).await?;

    assert!(uuid::Uuid::parse_str(&station.id).is_ok());
    assert_eq!(station.station_key, "E-001");
    assert_eq!(station.created_at, station.updated_at);

    Ok(())
}

/// Tests that a duplicate station key is rejected by the unique index.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_station_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    repo.create(param("E-002")).await?;
    let result = repo.create(param("E-002")).await;

    let err = result.expect_err("duplicate key should fail");
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
