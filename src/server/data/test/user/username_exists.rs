use super::*;

/// Tests detecting a taken username.
///
/// Expected: true for a taken name, false for a free one
#[tokio::test]
async fn detects_taken_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_exists("alice", None).await?);
    assert!(!repo.username_exists("bob", None).await?);

    Ok(())
}

/// Tests that the excluded account does not count as a conflict.
///
/// Keeping one's own username during a profile update must not be reported as taken.
///
/// Expected: false when the only match is the excluded user
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.username_exists("alice", Some(alice.id)).await?);

    Ok(())
}
