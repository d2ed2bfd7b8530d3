use super::*;

/// Tests storing a session and finding it by its token.
///
/// Expected: Ok with the stored session
#[tokio::test]
async fn finds_created_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let repo = AccessTokenRepository::new(db);
    let created = repo
        .create(CreateAccessTokenParam {
            token: "header.payload.signature".to_string(),
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        })
        .await?;

    let found = repo
        .find_by_token("header.payload.signature")
        .await?
        .expect("session exists");

    assert_eq!(found, created);
    assert_eq!(found.user_id, user.id);

    Ok(())
}

/// Tests that deleting by token removes only that session.
///
/// Expected: one row removed, the other session still present
#[tokio::test]
async fn deletes_only_matching_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let kept = factory::access_token::AccessTokenFactory::new(db, &user)
        .build()
        .await?;
    let dropped = factory::access_token::AccessTokenFactory::new(db, &user)
        .build()
        .await?;

    let repo = AccessTokenRepository::new(db);
    assert_eq!(repo.delete_by_token(&dropped.token).await?, 1);
    assert_eq!(repo.delete_by_token(&dropped.token).await?, 0);
    assert!(repo.find_by_token(&kept.token).await?.is_some());

    Ok(())
}
