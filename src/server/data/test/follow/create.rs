use super::*;

/// Tests creating a follow edge.
///
/// Expected: Ok(true) and the edge exists
#[tokio::test]
async fn creates_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;

    let repo = FollowRepository::new(db);

    assert!(repo.create(alice.id, bob.id).await?);
    assert!(repo.exists(alice.id, bob.id).await?);
    assert!(!repo.exists(bob.id, alice.id).await?);

    Ok(())
}

/// Tests creating an edge that already exists.
///
/// The insert must be a no-op rather than an error so concurrent toggles can detect
/// the lost race.
///
/// Expected: Ok(false) and counts unchanged
#[tokio::test]
async fn ignores_existing_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::follow::create_follow(db, alice.id, bob.id).await?;

    let repo = FollowRepository::new(db);

    assert!(!repo.create(alice.id, bob.id).await?);
    assert_eq!(repo.count_followers(bob.id).await?, 1);
    assert_eq!(repo.count_following(alice.id).await?, 1);

    Ok(())
}
