use super::*;

/// Tests a request carrying a valid token.
///
/// Expected: Ok(User) for the token's owner
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let key = AuthTokenRepository::new(db).get_or_create(user.id).await?;

    let headers = token_headers(&key);
    let result = AuthGuard::new(db, &headers).require().await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.username, "alice");

    Ok(())
}

/// Tests a request without credentials.
///
/// Expected: Err(AuthError::MissingCredentials)
#[tokio::test]
async fn denies_missing_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));

    Ok(())
}

/// Tests a request with an unknown token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let headers = token_headers("doesnotexist");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
