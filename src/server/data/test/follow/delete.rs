use super::*;

/// Tests removing a follow edge.
///
/// Expected: 1 row removed, then 0 on a second delete
#[tokio::test]
async fn removes_edge_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::follow::create_follow(db, alice.id, bob.id).await?;

    let repo = FollowRepository::new(db);

    assert_eq!(repo.delete(alice.id, bob.id).await?, 1);
    assert_eq!(repo.delete(alice.id, bob.id).await?, 0);
    assert!(!repo.exists(alice.id, bob.id).await?);

    Ok(())
}
