use super::*;

/// Tests the following feed.
///
/// Expected: only posts by followed authors, never the reader's own
#[tokio::test]
async fn lists_posts_of_followed_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::user::create_user(db).await?;
    let followed = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    factory::follow::create_follow(db, reader.id, followed.id).await?;

    let expected = factory::post::create_post(db, followed.id).await?;
    factory::post::create_post(db, stranger.id).await?;
    factory::post::create_post(db, reader.id).await?;

    let repo = PostRepository::new(db);
    let posts = repo.get_by_followed_authors(reader.id).await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, expected.id);

    Ok(())
}

/// Expected: empty feed when following nobody
#[tokio::test]
async fn returns_empty_without_follows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _) = factory::helpers::create_post_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);

    assert!(repo.get_by_followed_authors(reader.id).await?.is_empty());

    Ok(())
}
