use super::*;

/// Tests detecting a taken email, excluding the owner.
///
/// Expected: true for other users, false for the owner
#[tokio::test]
async fn detects_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("alice@example.com", None).await?);
    assert!(!repo.email_exists("alice@example.com", Some(alice.id)).await?);
    assert!(!repo.email_exists("bob@example.com", None).await?);

    Ok(())
}
