use super::*;
use crate::server::data::user::UserRepository;

/// Tests changing the profile picture.
///
/// Verifies that the user is emailed once when the picture changes and not again when
/// the same URL is submitted.
///
/// Expected: Ok with one notification in total
#[tokio::test]
async fn notifies_only_when_picture_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let entity = factory::user::UserFactory::new(db)
        .username("alice")
        .email("alice@example.com")
        .build()
        .await?;
    let user = UserRepository::new(db).find_by_id(entity.id).await?.unwrap();

    let service = UserService::new(db, &notifier);
    let params = UpdateProfileParams {
        profile_pic: Some("http://localhost/media/uploads/a.png".to_string()),
        ..Default::default()
    };

    let updated = service.update_me(&user, params.clone()).await?;
    assert_eq!(updated.profile_pic, "http://localhost/media/uploads/a.png");

    service.update_me(&updated, params).await?;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["alice@example.com".to_string()]);
    assert_eq!(sent[0].subject, "alice updated profile picture");

    Ok(())
}

/// Tests changing fields other than the picture.
///
/// Expected: Ok and no email
#[tokio::test]
async fn other_changes_are_silent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let entity = factory::user::create_user(db).await?;
    let user = UserRepository::new(db).find_by_id(entity.id).await?.unwrap();

    let service = UserService::new(db, &notifier);
    let updated = service
        .update_me(
            &user,
            UpdateProfileParams {
                bio: Some("Hello".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.bio, "Hello");
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests taking another account's username.
///
/// Keeping one's own username is allowed.
///
/// Expected: Err(Validation) on username for the taken name
#[tokio::test]
async fn rejects_username_of_other_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, _) = memory_notifier();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;
    let entity = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let user = UserRepository::new(db).find_by_id(entity.id).await?.unwrap();

    let service = UserService::new(db, &notifier);

    let unchanged = service
        .update_me(
            &user,
            UpdateProfileParams {
                username: Some("alice".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(unchanged.username, "alice");

    let result = service
        .update_me(
            &user,
            UpdateProfileParams {
                username: Some("taken".to_string()),
                ..Default::default()
            },
        )
        .await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error, got {:?}", result);
    };
    assert!(errors.get("username").is_some());

    Ok(())
}
