use super::*;

/// Tests logging in with valid credentials.
///
/// Verifies that login returns the token issued at registration and emails the user.
///
/// Expected: Ok with the same token and one login email
#[tokio::test]
async fn returns_existing_token_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let service = AuthService::new(db, &notifier);
    let (_, registered_token) = service
        .register(registration("alice", "alice@example.com"))
        .await?;

    let token = service.login(login("alice", "correct horse")).await?;

    assert_eq!(token, registered_token);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["alice@example.com".to_string()]);
    assert_eq!(sent[0].subject, "New login to your account");

    Ok(())
}

/// Tests logging in with a wrong password or unknown username.
///
/// Expected: Err(Validation) with `Invalid credentials.` and no email
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let service = AuthService::new(db, &notifier);
    service
        .register(registration("alice", "alice@example.com"))
        .await?;

    for params in [login("alice", "wrong password"), login("nobody", "whatever")] {
        let result = service.login(params).await;

        let Err(AppError::Validation(errors)) = result else {
            panic!("expected validation error, got {:?}", result);
        };
        assert_eq!(
            errors.get("non_field_errors"),
            Some(&["Invalid credentials.".to_string()][..])
        );
    }

    assert!(mailer.sent().is_empty());

    Ok(())
}
