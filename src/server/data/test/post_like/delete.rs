use super::*;

/// Tests removing a like.
///
/// Expected: 1 row removed and the like no longer exists
#[tokio::test]
async fn removes_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    factory::post_like::create_like(db, post.id, author.id).await?;

    let repo = PostLikeRepository::new(db);

    assert_eq!(repo.delete(post.id, author.id).await?, 1);
    assert!(!repo.exists(post.id, author.id).await?);
    assert_eq!(entity::prelude::PostLike::find().count(db).await?, 0);

    Ok(())
}
