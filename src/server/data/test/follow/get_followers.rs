use super::*;

/// Tests listing followers and followed users.
///
/// Verifies both directions of the edge and ordering by username.
///
/// Expected: followers sorted by username, following lists the target
#[tokio::test]
async fn lists_both_directions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::user::UserFactory::new(db)
        .username("target")
        .build()
        .await?;
    let zed = factory::user::UserFactory::new(db)
        .username("zed")
        .build()
        .await?;
    let amy = factory::user::UserFactory::new(db)
        .username("amy")
        .build()
        .await?;
    factory::follow::create_follow(db, zed.id, target.id).await?;
    factory::follow::create_follow(db, amy.id, target.id).await?;

    let repo = FollowRepository::new(db);

    let followers = repo.get_followers(target.id).await?;
    let names: Vec<_> = followers.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["amy", "zed"]);

    let following = repo.get_following(zed.id).await?;
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].id, target.id);

    assert!(repo.get_following(target.id).await?.is_empty());

    Ok(())
}
