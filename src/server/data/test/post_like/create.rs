use super::*;

/// Tests liking a post.
///
/// Expected: Ok(true) and the like is counted
#[tokio::test]
async fn creates_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = PostLikeRepository::new(db);

    assert!(repo.create(post.id, reader.id).await?);
    assert!(repo.exists(post.id, reader.id).await?);
    assert_eq!(entity::prelude::PostLike::find().count(db).await?, 1);

    Ok(())
}

/// Tests liking a post twice.
///
/// Expected: Ok(false) and a single like stored
#[tokio::test]
async fn ignores_duplicate_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;
    factory::post_like::create_like(db, post.id, reader.id).await?;

    let repo = PostLikeRepository::new(db);

    assert!(!repo.create(post.id, reader.id).await?);
    assert_eq!(entity::prelude::PostLike::find().count(db).await?, 1);

    Ok(())
}
