use super::*;

/// Tests that a valid session with an allowed role passes.
///
/// Expected: Ok(AuthSession) carrying the station from the token
#[tokio::test]
async fn admits_allowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, admin) = factory::helpers::create_station_with_admin(db).await?;
    let token = login(db, &admin).await?;
    let headers = bearer(&token);
    let signer = signer();

    let session = AuthGuard::new(db, &signer, &headers)
        .require(&[Role::SuperAdmin, Role::StationAdmin])
        .await?;

    assert_eq!(session.user_id, admin.id);
    assert_eq!(session.role, Role::StationAdmin);
    assert_eq!(session.station_id, Some(station.id));
    assert_eq!(session.token, token);

    Ok(())
}

/// Tests that an empty role list admits any authenticated caller.
///
/// Expected: Ok(AuthSession) for an employee
#[tokio::test]
async fn empty_role_list_admits_everyone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::user::UserFactory::new(db).build().await?;
    let token = login(db, &employee).await?;
    let headers = bearer(&token);
    let signer = signer();

    let session = AuthGuard::new(db, &signer, &headers).require(&[]).await?;

    assert_eq!(session.role, Role::Employee);

    Ok(())
}

/// Tests rejection of a role outside the allowed list.
///
/// Expected: Err(AuthError::InvalidPermissions)
#[tokio::test]
async fn rejects_disallowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::user::UserFactory::new(db).build().await?;
    let token = login(db, &employee).await?;
    let headers = bearer(&token);
    let signer = signer();

    let result = AuthGuard::new(db, &signer, &headers)
        .require(&[Role::SuperAdmin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidPermissions {
            role: Role::Employee,
            ..
        }))
    ));

    Ok(())
}

/// Tests that a correctly signed token without a session row is refused.
///
/// Expected: Err(AuthError::ExpiredToken)
#[tokio::test]
async fn rejects_token_without_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let domain = UserRepository::new(db)
        .find_by_id(&user.id)
        .await?
        .expect("user exists");
    let (token, _) = signer().issue(&domain)?;
    let headers = bearer(&token);
    let signer = signer();

    let result = AuthGuard::new(db, &signer, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::ExpiredToken))
    ));

    Ok(())
}

/// Tests that a missing header and a forged token are rejected before any
/// session lookup.
///
/// Expected: MissingToken, then InvalidToken
#[tokio::test]
async fn rejects_missing_and_forged_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();

    let empty = HeaderMap::new();
    let missing = AuthGuard::new(db, &signer, &empty).require(&[]).await;
    assert!(matches!(
        missing,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    let forged = bearer("a.b.c");
    let invalid = AuthGuard::new(db, &signer, &forged).require(&[]).await;
    assert!(matches!(
        invalid,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

#[test]
fn parses_bearer_scheme_case_insensitively() {
    assert_eq!(bearer_token(&bearer("abc")), Some("abc"));

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer  xyz "));
    assert_eq!(bearer_token(&headers), Some("xyz"));

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    assert_eq!(bearer_token(&headers), None);

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer"));
    assert_eq!(bearer_token(&headers), None);
}
