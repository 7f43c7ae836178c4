use super::*;

/// Tests creating a new account.
///
/// Verifies that the repository stores the account with an empty profile picture
/// and returns the domain model.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("alice", "alice@example.com")).await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.profile_pic, "");
    assert!(repo.find_by_id(user.id).await?.is_some());

    Ok(())
}

/// Tests creating an account with a taken username.
///
/// Verifies that the unique constraint on username rejects the insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("alice", "alice@example.com")).await?;
    let result = repo.create(create_params("alice", "other@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
