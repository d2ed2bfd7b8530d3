use super::*;

/// Tests looking up a user's credentials by email.
///
/// Expected: Ok with the user and the stored hash
#[tokio::test]
async fn finds_user_and_hash_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("luis@example.com")
        .password("$argon2id$stub")
        .build()
        .await?;

    let (found, hash) = UserRepository::new(db)
        .find_credentials("luis@example.com")
        .await?
        .expect("user exists");

    assert_eq!(found.id, user.id);
    assert_eq!(hash, "$argon2id$stub");

    Ok(())
}

/// Tests an email with no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).build().await?;

    let found = UserRepository::new(db)
        .find_credentials("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
