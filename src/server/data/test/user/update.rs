use super::*;

/// Tests a partial profile update.
///
/// Verifies that provided fields change and omitted fields keep their stored values.
///
/// Expected: Ok(Some) with only bio and profile picture changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .display_name("Alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateProfileParams {
                bio: Some("Writer".to_string()),
                profile_pic: Some("http://localhost/media/uploads/a.png".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "alice");
    assert_eq!(updated.display_name, "Alice");
    assert_eq!(updated.bio, "Writer");
    assert_eq!(updated.profile_pic, "http://localhost/media/uploads/a.png");

    Ok(())
}

/// Tests clearing the date of birth.
///
/// Expected: dob set back to None
#[tokio::test]
async fn clears_date_of_birth() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    let dob = chrono::NaiveDate::from_ymd_opt(1990, 5, 17);
    let updated = repo
        .update(
            user.id,
            UpdateProfileParams {
                dob: Some(dob),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.dob, dob);

    let cleared = repo
        .update(
            user.id,
            UpdateProfileParams {
                dob: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(cleared.dob, None);

    Ok(())
}

/// Expected: Ok(None) for an unknown ID
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(9999, UpdateProfileParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
