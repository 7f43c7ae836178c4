use super::*;

/// Tests registering a new account.
///
/// Verifies that the account is stored with a hashed password and a token is issued.
///
/// Expected: Ok with user and token
#[tokio::test]
async fn registers_user_with_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let service = AuthService::new(db, &notifier);
    let (user, token) = service
        .register(registration("alice", "alice@example.com"))
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(token.len(), TOKEN_LENGTH);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "correct horse");
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests registering with a taken username and email.
///
/// Expected: Err(Validation) with errors on both fields
#[tokio::test]
async fn rejects_taken_username_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, _) = memory_notifier();

    let service = AuthService::new(db, &notifier);
    service
        .register(registration("alice", "alice@example.com"))
        .await?;

    let result = service
        .register(registration("alice", "alice@example.com"))
        .await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error, got {:?}", result);
    };
    assert_eq!(
        errors.get("username"),
        Some(&["A user with that username already exists.".to_string()][..])
    );
    assert_eq!(
        errors.get("email"),
        Some(&["A user with that email already exists.".to_string()][..])
    );

    Ok(())
}
