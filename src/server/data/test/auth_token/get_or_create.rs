use super::*;

/// Tests issuing a token for a user without one.
///
/// Expected: Ok with an alphanumeric key of the configured length
#[tokio::test]
async fn creates_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = AuthTokenRepository::new(db);
    let key = repo.get_or_create(user.id).await?;

    assert_eq!(key.len(), TOKEN_LENGTH);
    assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));

    Ok(())
}

/// Tests that a second call reuses the stored token.
///
/// Expected: same key returned and a single token row
#[tokio::test]
async fn reuses_existing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = AuthTokenRepository::new(db);
    let first = repo.get_or_create(user.id).await?;
    let second = repo.get_or_create(user.id).await?;

    assert_eq!(first, second);
    assert_eq!(entity::prelude::AuthToken::find().count(db).await?, 1);

    Ok(())
}
