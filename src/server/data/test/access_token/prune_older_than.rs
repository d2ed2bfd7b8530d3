use super::*;

/// Tests pruning sessions created before a cut-off.
///
/// Expected: only the stale session is removed
#[tokio::test]
async fn prunes_stale_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let now = Utc::now();
    let stale = factory::access_token::AccessTokenFactory::new(db, &user)
        .created_at(now - Duration::hours(30))
        .build()
        .await?;
    let fresh = factory::access_token::AccessTokenFactory::new(db, &user)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = AccessTokenRepository::new(db);
    let removed = repo.prune_older_than(now - Duration::hours(24)).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_token(&stale.token).await?.is_none());
    assert!(repo.find_by_token(&fresh.token).await?.is_some());

    Ok(())
}
