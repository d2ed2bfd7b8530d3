use super::*;

/// Tests creating a user and reading it back.
///
/// Expected: Ok with role and station preserved
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::station::create_station(db).await?;
    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::StationAdmin,
            station_id: Some(station.id.clone()),
        })
        .await?;

    let found = repo.find_by_id(&user.id).await?.expect("user exists");
    assert_eq!(found, user);
    assert_eq!(found.role, Role::StationAdmin);
    assert_eq!(found.station_id, Some(station.id));

    Ok(())
}

/// Tests that a stored role outside the known set is reported as an
/// internal error rather than silently mapped.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("Janitor")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(&user.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

/// Tests that updating the password replaces the stored hash and leaves
/// other fields alone.
///
/// Expected: Ok with new hash returned by find_credentials
#[tokio::test]
async fn updates_password_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let repo = UserRepository::new(db);

    let param = UpdateUserParam {
        password_hash: Some("new-hash".to_string()),
        ..UpdateUserParam::default()
    };
    let updated = repo.update(&user.id, param).await?.expect("user exists");
    let (_, hash) = repo
        .find_credentials(&user.email)
        .await?
        .expect("user exists");

    assert_eq!(hash, "new-hash");
    assert_eq!(updated.first_name, user.first_name);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}
